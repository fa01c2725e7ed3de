//! Registry error types
//!
//! Error types for registry operations. All of them are recoverable:
//! duplicate inserts and missing removes are expected under racing
//! join/leave, and a failed operation leaves the registry untouched.

use super::entry::EndpointKey;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An endpoint with the same name and kind is already registered
    DuplicateEntry(EndpointKey),
    /// No endpoint with this name and kind is registered
    NotFound(EndpointKey),
    /// The registry holds its configured maximum number of entries
    CapacityExceeded {
        /// The configured capacity
        capacity: usize,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateEntry(key) => {
                write!(f, "Endpoint already registered: {}", key)
            }
            RegistryError::NotFound(key) => write!(f, "Endpoint not registered: {}", key),
            RegistryError::CapacityExceeded { capacity } => {
                write!(f, "Registry full: capacity {} reached", capacity)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
