//! Error types for provider operations.

use thiserror::Error;

/// Errors that can occur while a provider processes a message.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backend rejected or failed to process the request.
    #[error("backend error: {0}")]
    Backend(String),

    /// The request could not be serialized or the response parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The provider is not ready to accept requests.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}
