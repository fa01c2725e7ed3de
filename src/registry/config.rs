//! Registry configuration

/// Default maximum number of live endpoints
pub const DEFAULT_CAPACITY: usize = 4096;

/// Configuration for the service registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Maximum number of live endpoints the registry will hold
    pub capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RegistryConfig {
    /// Set the endpoint capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
