//! Discovery client error types

/// Error type for discovery client operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryError {
    /// A callback is already subscribed on this client
    AlreadySubscribed,
}

impl std::fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoveryError::AlreadySubscribed => {
                write!(f, "A callback is already subscribed; unsubscribe first")
            }
        }
    }
}

impl std::error::Error for DiscoveryError {}
