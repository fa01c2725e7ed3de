//! Dynamic service discovery for zero-copy shared-memory IPC
//!
//! Independent processes publish and subscribe to typed data endpoints named
//! by a (service, instance, event) triple. This crate tracks which endpoints
//! are currently live and lets callers query that set synchronously or
//! subscribe to asynchronous change notifications:
//!
//! - [`ident`]: endpoint names and partially-wildcarded queries
//! - [`registry`]: the shared, authoritative set of live endpoints
//! - [`event`]: the listener primitive delivering change callbacks
//! - [`discovery`]: the per-use-site client facade
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use shm_discovery::{
//!     DiscoveryClient, EndpointKind, Listener, ServiceQuery, ServiceRegistry, ServiceTriple,
//! };
//!
//! #[tokio::main]
//! async fn main() -> shm_discovery::Result<()> {
//!     let registry = Arc::new(ServiceRegistry::new());
//!     let listener = Arc::new(Listener::new());
//!
//!     // An endpoint owner registers itself
//!     let pose = ServiceTriple::new("nav", "front", "pose")?;
//!     registry.insert(pose.clone(), EndpointKind::Publisher).await?;
//!
//!     // A discovery client looks it up and watches for changes
//!     let mut client = DiscoveryClient::new(Arc::clone(&registry), listener);
//!     let found = client.find(&ServiceQuery::any().service("nav")?).await;
//!     assert_eq!(found.len(), 1);
//!
//!     client.subscribe(|_registry| println!("endpoint set changed"))?;
//!     registry.remove(&pose, EndpointKind::Publisher).await?;
//!
//!     client.unsubscribe().await;
//!     Ok(())
//! }
//! ```

pub mod discovery;
pub mod error;
pub mod event;
pub mod ident;
pub mod registry;

// Re-export commonly used items
pub use discovery::{DiscoveryClient, DiscoveryError, DiscoveryEvent};
pub use error::{Error, Result};
pub use event::{Attachment, Listener};
pub use ident::{IdentError, ServiceQuery, ServiceTriple};
pub use registry::{
    EndpointKey, EndpointKind, RegistryConfig, RegistryEntry, RegistryError, ServiceRegistry,
};
