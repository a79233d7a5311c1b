use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse a portfolio from the terminal
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "A terminal portfolio browser")]
pub struct Cli {
    /// Path to an alternate catalog document (TOML). Defaults to the
    /// catalog embedded in the binary.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the catalog and print a content summary
    Check,
}
