//! Registry entry and endpoint kind types
//!
//! This module defines the per-endpoint record stored in the registry.

use std::fmt;

use crate::ident::ServiceTriple;

/// Role of an endpoint in the middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// Publishes typed data samples
    Publisher,
    /// Consumes typed data samples
    Subscriber,
    /// Answers requests
    Server,
    /// Issues requests
    Client,
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndpointKind::Publisher => "publisher",
            EndpointKind::Subscriber => "subscriber",
            EndpointKind::Server => "server",
            EndpointKind::Client => "client",
        };
        f.write_str(name)
    }
}

/// Unique identity of a live endpoint (name + kind)
///
/// The registry holds at most one entry per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointKey {
    /// Endpoint name
    pub triple: ServiceTriple,
    /// Endpoint role
    pub kind: EndpointKind,
}

impl EndpointKey {
    /// Create a new key
    pub fn new(triple: ServiceTriple, kind: EndpointKind) -> Self {
        Self { triple, kind }
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.triple)
    }
}

/// Record of one live endpoint
///
/// Entries are created by the registry at insertion time and handed out by
/// value; the version is assigned from a monotonic allocator and never
/// reused within a process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    triple: ServiceTriple,
    kind: EndpointKind,
    version: u64,
}

impl RegistryEntry {
    pub(super) fn new(triple: ServiceTriple, kind: EndpointKind, version: u64) -> Self {
        Self {
            triple,
            kind,
            version,
        }
    }

    /// Get the endpoint name
    pub fn triple(&self) -> &ServiceTriple {
        &self.triple
    }

    /// Get the endpoint role
    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    /// Get the insertion version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get the identity of this entry
    pub fn key(&self) -> EndpointKey {
        EndpointKey::new(self.triple.clone(), self.kind)
    }
}

impl fmt::Display for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (v{})", self.kind, self.triple, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(EndpointKind::Publisher.to_string(), "publisher");
        assert_eq!(EndpointKind::Client.to_string(), "client");
    }

    #[test]
    fn test_key_equality_includes_kind() {
        let triple = ServiceTriple::new("nav", "front", "pose").unwrap();
        let a = EndpointKey::new(triple.clone(), EndpointKind::Publisher);
        let b = EndpointKey::new(triple.clone(), EndpointKind::Subscriber);

        // Same name, different role: distinct endpoints
        assert_ne!(a, b);
        assert_eq!(a, EndpointKey::new(triple, EndpointKind::Publisher));
    }

    #[test]
    fn test_entry_display() {
        let triple = ServiceTriple::new("nav", "front", "pose").unwrap();
        let entry = RegistryEntry::new(triple, EndpointKind::Publisher, 3);

        assert_eq!(entry.to_string(), "publisher nav/front/pose (v3)");
    }
}
