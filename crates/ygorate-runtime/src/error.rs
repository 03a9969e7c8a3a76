use std::fmt;

/// Result type for ygorate-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the maintenance layer
#[derive(Debug)]
pub enum Error {
    /// Engine/pack-file layer error
    Engine(ygorate_engine::Error),

    /// Remote API layer error
    Client(ygorate_client::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Invalid operation or arguments
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "{}", err),
            Error::Client(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidOperation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Client(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::InvalidOperation(_) => None,
        }
    }
}

impl From<ygorate_engine::Error> for Error {
    fn from(err: ygorate_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<ygorate_client::Error> for Error {
    fn from(err: ygorate_client::Error) -> Self {
        Error::Client(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
