//! Application state shared across handlers.

use std::sync::Arc;

use orchestrator::Orchestrator;
use provider_core::Security;

use crate::session::ConnectionManager;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The shared orchestrator all entry points dispatch through.
    pub orchestrator: Arc<Orchestrator>,
    /// Boundary-level token authentication, if configured.
    pub security: Option<Arc<dyn Security>>,
    /// Open duplex sessions.
    pub connections: Arc<ConnectionManager>,
}

impl AppState {
    /// Create new application state.
    pub fn new(orchestrator: Arc<Orchestrator>, security: Option<Arc<dyn Security>>) -> Self {
        Self {
            orchestrator,
            security,
            connections: Arc::new(ConnectionManager::new()),
        }
    }
}
