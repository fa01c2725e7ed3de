//! Crate-level error type
//!
//! Aggregates the per-module error types for callers that surface any
//! discovery failure through a single `Result`.

use crate::discovery::DiscoveryError;
use crate::ident::IdentError;
use crate::registry::RegistryError;

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error type covering all discovery operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Identifier validation failure
    Ident(IdentError),
    /// Registry operation failure
    Registry(RegistryError),
    /// Discovery client operation failure
    Discovery(DiscoveryError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Ident(e) => write!(f, "Identifier error: {}", e),
            Error::Registry(e) => write!(f, "Registry error: {}", e),
            Error::Discovery(e) => write!(f, "Discovery error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Ident(e) => Some(e),
            Error::Registry(e) => Some(e),
            Error::Discovery(e) => Some(e),
        }
    }
}

impl From<IdentError> for Error {
    fn from(e: IdentError) -> Self {
        Error::Ident(e)
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

impl From<DiscoveryError> for Error {
    fn from(e: DiscoveryError) -> Self {
        Error::Discovery(e)
    }
}
