//! Insertion-ordered registries for providers and tools.
//!
//! Registration order is tracked explicitly so the selector's fallback
//! pick stays deterministic for an unchanged registry. Re-registering an
//! identifier replaces the handle in place (last write wins) without
//! changing its position.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::info;

use provider_core::{Provider, Tool};

/// A point-in-time copy of the provider registry.
///
/// Handles are `Arc` clones, so a snapshot is cheap and stays valid even
/// if the live registry changes underneath.
pub type ProviderSnapshot = IndexMap<String, Arc<dyn Provider>>;

/// Thread-safe, read-mostly mapping of provider identifier to handle.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<IndexMap<String, Arc<dyn Provider>>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under `id`, replacing any existing handle.
    pub async fn register(&self, id: impl Into<String>, provider: Arc<dyn Provider>) {
        let id = id.into();
        info!(provider = %id, "Provider registered");
        self.providers.write().await.insert(id, provider);
    }

    /// A consistent snapshot of the current registrations.
    pub async fn snapshot(&self) -> ProviderSnapshot {
        self.providers.read().await.clone()
    }

    /// Look up a provider handle by identifier.
    pub async fn get(&self, id: &str) -> Option<Arc<dyn Provider>> {
        self.providers.read().await.get(id).cloned()
    }

    /// Number of registered providers.
    pub async fn len(&self) -> usize {
        self.providers.read().await.len()
    }

    /// Whether no providers are registered.
    pub async fn is_empty(&self) -> bool {
        self.providers.read().await.is_empty()
    }
}

/// Thread-safe mapping of tool identifier to handle.
///
/// Tools are stored but never invoked by the dispatch path.
#[derive(Default)]
pub struct ToolRegistry {
    tools: RwLock<IndexMap<String, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under `id`, replacing any existing handle.
    pub async fn register(&self, id: impl Into<String>, tool: Arc<dyn Tool>) {
        let id = id.into();
        info!(tool = %id, "Tool registered");
        self.tools.write().await.insert(id, tool);
    }

    /// Look up a tool handle by identifier.
    pub async fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.tools.read().await.get(id).cloned()
    }

    /// Number of registered tools.
    pub async fn len(&self) -> usize {
        self.tools.read().await.len()
    }
}
