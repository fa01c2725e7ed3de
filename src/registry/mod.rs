//! Live endpoint registry
//!
//! The registry is the process-wide authoritative set of currently live
//! endpoints. Endpoint owners insert themselves on construction and remove
//! themselves on destruction; discovery clients query snapshots and watch
//! for changes.
//!
//! # Architecture
//!
//! ```text
//!                       Arc<ServiceRegistry>
//!                  ┌───────────────────────────┐
//!                  │ entries: HashMap<Key,     │
//!                  │   RegistryEntry {         │
//!                  │     triple, kind, version │
//!                  │   }                       │
//!                  │ >                         │
//!                  │ change_counter            │──► watch::Sender<u64>
//!                  └─────────────┬─────────────┘          │
//!                                │                        │
//!        ┌───────────────────────┼───────────────┐        ▼
//!        │                       │               │   [Listener]
//!        ▼                       ▼               ▼   delivery task
//!   [Publisher]            [Subscriber]    [DiscoveryClient]
//!   insert()/remove()      insert()/remove()    query()
//! ```
//!
//! Mutation and notification are decoupled: `insert`/`remove` update the
//! map under the write lock, bump the change counter and fire the `watch`
//! channel, then return. Callbacks run later on listener delivery tasks,
//! never inside the mutator, so one endpoint's join/leave cannot block on
//! an arbitrary observer.

pub mod config;
pub mod entry;
pub mod error;
pub mod store;

pub use config::RegistryConfig;
pub use entry::{EndpointKey, EndpointKind, RegistryEntry};
pub use error::RegistryError;
pub use store::ServiceRegistry;
