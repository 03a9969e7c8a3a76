use std::fmt;

/// Result type for ygorate-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur talking to the card-info API.
///
/// Every variant is surfaced per card; none of them takes the viewer down.
/// Cancellation is not represented here at all, a superseded fetch simply
/// never delivers.
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, ...)
    Network(reqwest::Error),

    /// The API answered with a non-success status
    Http(u16),

    /// The API answered 200 but the payload was not the expected shape
    Decode(String),

    /// The API returned an empty result set for the query
    NotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(err) => write!(f, "Network error: {}", err),
            Error::Http(status) => write!(f, "HTTP {}", status),
            Error::Decode(msg) => write!(f, "Unexpected API response: {}", msg),
            Error::NotFound => write!(f, "Card not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(err) => Some(err),
            Error::Http(_) | Error::Decode(_) | Error::NotFound => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}
