use std::fmt;

/// Result type for folio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading the content catalog
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),
    /// Catalog document failed to parse
    Parse(toml::de::Error),
    /// Two projects share the same id
    DuplicateProjectId(String),
    /// A learning topic carries a progress value outside 0..=100
    ProgressOutOfRange { topic: String, progress: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse(err) => write!(f, "catalog parse error: {}", err),
            Error::DuplicateProjectId(id) => {
                write!(f, "duplicate project id in catalog: {}", id)
            }
            Error::ProgressOutOfRange { topic, progress } => {
                write!(
                    f,
                    "learning topic '{}' has progress {} (expected 0..=100)",
                    topic, progress
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err)
    }
}
