//! Service registry implementation
//!
//! The central registry that tracks all currently live endpoints and is the
//! sole source of change events.

use std::collections::HashMap;

use tokio::sync::{watch, RwLock};

use crate::ident::{ServiceQuery, ServiceTriple};

use super::config::RegistryConfig;
use super::entry::{EndpointKey, EndpointKind, RegistryEntry};
use super::error::RegistryError;

/// Central registry of all live endpoints
///
/// Thread-safe via `RwLock`: queries and staleness probes take concurrent
/// read access, mutations take exclusive write access, so a query always
/// sees a fully-applied state.
///
/// Change notification is decoupled from mutation. Mutators fire a `watch`
/// channel carrying the change counter and return; attached observers wake
/// on their own tasks. `watch` keeps only the latest value, so a burst of
/// mutations ahead of a slow observer collapses into one wake-up: delivery
/// is at-least-once per observed state change, not once per mutation.
pub struct ServiceRegistry {
    /// Live entries, version allocator and change counter, guarded together
    state: RwLock<RegistryState>,

    /// Change event; the payload is the change counter after the mutation
    changed_tx: watch::Sender<u64>,

    /// Configuration
    config: RegistryConfig,
}

struct RegistryState {
    entries: HashMap<EndpointKey, RegistryEntry>,
    next_version: u64,
    change_counter: u64,
}

impl ServiceRegistry {
    /// Create a new registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        let (changed_tx, _) = watch::channel(0);

        Self {
            state: RwLock::new(RegistryState {
                entries: HashMap::new(),
                next_version: 1,
                change_counter: 0,
            }),
            changed_tx,
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a live endpoint
    ///
    /// Fails with `DuplicateEntry` if an endpoint with the same name and
    /// kind is already present, and with `CapacityExceeded` at the
    /// configured entry limit. A failed insert leaves the registry, the
    /// change counter and the version allocator untouched.
    pub async fn insert(
        &self,
        triple: ServiceTriple,
        kind: EndpointKind,
    ) -> Result<RegistryEntry, RegistryError> {
        let mut state = self.state.write().await;

        let key = EndpointKey::new(triple, kind);
        if state.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateEntry(key));
        }
        if state.entries.len() >= self.config.capacity {
            return Err(RegistryError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        let version = state.next_version;
        state.next_version += 1;

        let entry = RegistryEntry::new(key.triple.clone(), key.kind, version);
        state.entries.insert(key, entry.clone());

        state.change_counter += 1;
        self.changed_tx.send_replace(state.change_counter);

        tracing::info!(
            endpoint = %entry,
            change_counter = state.change_counter,
            "Endpoint registered"
        );

        Ok(entry)
    }

    /// Deregister a live endpoint
    ///
    /// Fails with `NotFound` if no endpoint with this name and kind is
    /// present; the registry and the change counter stay untouched then.
    pub async fn remove(
        &self,
        triple: &ServiceTriple,
        kind: EndpointKind,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write().await;

        let key = EndpointKey::new(triple.clone(), kind);
        let entry = match state.entries.remove(&key) {
            Some(entry) => entry,
            None => return Err(RegistryError::NotFound(key)),
        };

        state.change_counter += 1;
        self.changed_tx.send_replace(state.change_counter);

        tracing::info!(
            endpoint = %entry,
            change_counter = state.change_counter,
            "Endpoint deregistered"
        );

        Ok(())
    }

    /// Query the registry
    ///
    /// Returns a value-copied snapshot of all entries matching the query,
    /// ordered by ascending insertion version. The snapshot reflects the
    /// registry at one instant and is immune to later mutation.
    pub async fn query(&self, query: &ServiceQuery) -> Vec<RegistryEntry> {
        let state = self.state.read().await;

        let mut matches: Vec<RegistryEntry> = state
            .entries
            .values()
            .filter(|entry| query.matches(entry.triple()))
            .cloned()
            .collect();

        matches.sort_by_key(|entry| entry.version());
        matches
    }

    /// Get the change counter
    ///
    /// Strictly increases on every successful insert or remove and never on
    /// a failed one, letting callers detect staleness of a prior snapshot
    /// without re-querying. The counter is 64-bit; exhaustion is unreachable
    /// within a process lifetime.
    pub async fn change_counter(&self) -> u64 {
        self.state.read().await.change_counter
    }

    /// Subscribe to the change event
    ///
    /// The receiver wakes after every successful mutation and observes the
    /// latest change counter. Pending wake-ups coalesce; observers must not
    /// assume one wake-up per mutation.
    pub fn watch_changes(&self) -> watch::Receiver<u64> {
        self.changed_tx.subscribe()
    }

    /// Check whether an endpoint is currently registered
    pub async fn contains(&self, triple: &ServiceTriple, kind: EndpointKind) -> bool {
        let state = self.state.read().await;
        state
            .entries
            .contains_key(&EndpointKey::new(triple.clone(), kind))
    }

    /// Get the number of live endpoints
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    /// Check whether the registry is empty
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
