//! Hash table error definitions

use std::error::Error;
use std::fmt;

/// Hash table error types
///
/// Only construction and configuration loading can fail. Operations on a
/// built table are total.
#[derive(Debug)]
pub enum TableError {
    /// Invalid capacity or load factor
    InvalidArgument(String),
    /// I/O error while reading a configuration file
    IoError(std::io::Error),
    /// Error parsing configuration data
    ParseError(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            TableError::IoError(err) => write!(f, "I/O error: {}", err),
            TableError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TableError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::IoError(err)
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::ParseError(err.to_string())
    }
}

/// Result type for hash table construction
pub type TableResult<T> = Result<T, TableError>;
