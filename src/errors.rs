//! Error types for the egress IP checker

use std::fmt;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, CheckerError>;

#[derive(Debug)]
pub enum CheckerError {
    /// HTTP request failed
    Http(reqwest::Error),

    /// Request exceeded the per-request timeout
    Timeout(Duration),

    /// Echo service answered with a non-success status
    UnexpectedStatus(reqwest::StatusCode),

    /// Response body was empty after trimming
    EmptyBody,

    /// Configuration error
    Config(String),

    /// Generic error with message
    Other(String),
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::Http(err) => write!(f, "HTTP error: {}", err),
            CheckerError::Timeout(limit) => {
                write!(f, "request timed out after {:?}", limit)
            }
            CheckerError::UnexpectedStatus(status) => {
                write!(f, "unexpected response status: {}", status)
            }
            CheckerError::EmptyBody => write!(f, "echo service returned an empty body"),
            CheckerError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CheckerError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CheckerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckerError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CheckerError {
    fn from(err: reqwest::Error) -> Self {
        CheckerError::Http(err)
    }
}
