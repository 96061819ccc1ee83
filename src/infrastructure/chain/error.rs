//! Chain error definitions

use std::error::Error;
use std::fmt;

/// Chain error types
///
/// Positional operations reject indices outside the chain. These are
/// contract violations by the caller and are reported immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Index past the valid range for the operation
    IndexOutOfBounds {
        /// Requested position
        index: usize,
        /// Chain size at the time of the call
        size: usize,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::IndexOutOfBounds { index, size } => {
                write!(f, "Index out of bounds: {} (size {})", index, size)
            }
        }
    }
}

impl Error for ChainError {}

/// Result type for chain operations
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_error_display() {
        let err = ChainError::IndexOutOfBounds { index: 4, size: 2 };
        assert_eq!(err.to_string(), "Index out of bounds: 4 (size 2)");
    }
}
