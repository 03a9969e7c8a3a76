use std::fmt;
use std::path::PathBuf;

/// Result type for ygorate-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// A pack source file is malformed. Fatal: the whole load is rejected.
    PackFile { path: PathBuf, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::PackFile { path, message } => {
                write!(f, "Invalid pack file {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::PackFile { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
