use std::fmt;

/// Error types for playgen operations
#[derive(Debug)]
pub enum PlaygenError {
    /// IO error (output file, config file)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// Not enough memory for the verification table
    Allocation(std::collections::TryReserveError),
}

impl fmt::Display for PlaygenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaygenError::Io(err) => write!(f, "IO error: {err}"),
            PlaygenError::Config(msg) => write!(f, "Configuration error: {msg}"),
            PlaygenError::Http(err) => write!(f, "HTTP error: {err}"),
            PlaygenError::Allocation(err) => write!(f, "Allocation error: {err}"),
        }
    }
}

impl std::error::Error for PlaygenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaygenError::Io(err) => Some(err),
            PlaygenError::Http(err) => Some(err),
            PlaygenError::Allocation(err) => Some(err),
            PlaygenError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for PlaygenError {
    fn from(err: std::io::Error) -> Self {
        PlaygenError::Io(err)
    }
}

impl From<reqwest::Error> for PlaygenError {
    fn from(err: reqwest::Error) -> Self {
        PlaygenError::Http(err)
    }
}

impl From<std::collections::TryReserveError> for PlaygenError {
    fn from(err: std::collections::TryReserveError) -> Self {
        PlaygenError::Allocation(err)
    }
}

/// Type alias for Results using PlaygenError
pub type Result<T> = std::result::Result<T, PlaygenError>;
