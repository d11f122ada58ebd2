use crate::config::ServerConfig;
use std::sync::Arc;
use store::StringStore;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Record store (shared across requests)
    pub store: Arc<StringStore>,
}

impl ServerState {
    /// Create new server state with a fresh in-memory store.
    ///
    /// The store's lifecycle is scoped to this state: dropping the last
    /// handle drops the records. Nothing lives in process-wide globals.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(StringStore::in_memory()),
        }
    }
}
