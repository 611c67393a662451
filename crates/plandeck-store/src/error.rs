use std::fmt;
use std::path::PathBuf;

/// Result type for plandeck-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Persisted document exists but cannot be parsed.
    ///
    /// Never downgraded to an empty collection: the next mutation would
    /// rewrite the file and erase whatever the user had.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Collection could not be serialized for writing
    Serialize(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Corrupt { path, source } => write!(
                f,
                "Corrupt task document at {}: {}",
                path.display(),
                source
            ),
            Error::Serialize(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Corrupt { source, .. } => Some(source),
            Error::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
