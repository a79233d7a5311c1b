use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use folio_core::Catalog;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::args::{Cli, Commands};
use crate::presentation::renderers::tui;

pub fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Some(Commands::Check) => check(&catalog),
        None => {
            if !io::stdout().is_terminal() {
                bail!("refusing to start the TUI: stdout is not a terminal (try `folio check`)");
            }
            tui::run(catalog)
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Catalog::builtin().context("embedded catalog is invalid"),
    }
}

fn check(catalog: &Catalog) -> Result<()> {
    println!("{} catalog is valid", "✓".green());
    println!("  profile:      {}", catalog.profile.name);
    println!("  projects:     {}", catalog.projects.len());
    println!("  certificates: {}", catalog.certificates.len());
    println!("  learning:     {}", catalog.learning.len());
    println!("  study weeks:  {}", catalog.study_hours.len());
    println!("  contacts:     {}", catalog.contacts.len());
    Ok(())
}
