//! Identifier validation error types

use super::triple::MAX_IDENT_LEN;

/// Error type for identifier validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentError {
    /// Identifier field exceeds the maximum length
    TooLong {
        /// Which field was rejected ("service", "instance" or "event")
        field: &'static str,
        /// Length of the rejected value in bytes
        len: usize,
    },
    /// Identifier field contains a reserved character
    InvalidCharacter {
        /// Which field was rejected
        field: &'static str,
        /// The offending character
        ch: char,
    },
}

impl std::fmt::Display for IdentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentError::TooLong { field, len } => {
                write!(
                    f,
                    "{} identifier too long: {} bytes (max {})",
                    field, len, MAX_IDENT_LEN
                )
            }
            IdentError::InvalidCharacter { field, ch } => {
                write!(f, "{} identifier contains reserved character {:?}", field, ch)
            }
        }
    }
}

impl std::error::Error for IdentError {}
