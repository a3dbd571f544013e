//! Error types for dispatch operations.

use thiserror::Error;

/// Terminal failures of one dispatch call.
///
/// None of these are retried by the orchestrator; each degrades to an
/// error payload for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The security collaborator rejected the user.
    #[error("Unauthorized")]
    Unauthorized,

    /// The registry is empty or no selection rule matched a provider.
    #[error("No suitable provider available")]
    NoProviderAvailable,

    /// The selected provider failed; carries the backend's failure text.
    #[error("Error processing message: {0}")]
    Provider(String),
}
