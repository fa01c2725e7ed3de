//! Discovery client facade
//!
//! A `DiscoveryClient` is a lightweight, owner-held handle over the shared
//! registry: point queries via [`find`](client::DiscoveryClient::find) and at
//! most one change subscription delivered through a [`Listener`].
//!
//! [`Listener`]: crate::event::Listener

pub mod client;
pub mod error;

pub use client::DiscoveryClient;
pub use error::DiscoveryError;

/// Change events the discovery subsystem attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryEvent {
    /// The set of live endpoints changed
    RegistryChanged,
}

impl DiscoveryEvent {
    /// Tag used when attaching this event to a listener
    pub fn tag(self) -> &'static str {
        match self {
            DiscoveryEvent::RegistryChanged => "registry-changed",
        }
    }
}
