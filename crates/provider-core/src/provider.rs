//! The Provider trait and its request/response types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProviderError;

/// Opaque per-request context passed through to collaborators untouched.
pub type Context = serde_json::Map<String, Value>;

/// Capability flags advertised by a provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Can generate free-form text.
    pub text_generation: bool,
    /// Can generate source code.
    pub code_generation: bool,
    /// Can call external tools.
    pub tool_use: bool,
    /// Supports multi-step reasoning.
    pub reasoning: bool,
}

/// Token accounting reported by a provider, if available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt.
    pub prompt: u32,
    /// Tokens in the generated completion.
    pub completion: u32,
    /// Total tokens billed.
    pub total: u32,
}

/// A generated response returned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// The generated content.
    pub content: String,
    /// Identifier the provider reports for itself, if any.
    pub provider: Option<String>,
    /// Model used to generate the response, if any.
    pub model: Option<String>,
    /// Token usage, if the backend reports it.
    pub tokens: Option<TokenUsage>,
}

impl ProviderResponse {
    /// Create a response carrying only content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            provider: None,
            model: None,
            tokens: None,
        }
    }

    /// Attach the reporting provider's identifier.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Attach the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Attach token usage.
    pub fn with_tokens(mut self, tokens: TokenUsage) -> Self {
        self.tokens = Some(tokens);
        self
    }
}

/// A pluggable backend that turns a message into a generated response.
///
/// This trait is object-safe and used as `Arc<dyn Provider>` by the
/// orchestrator's registry. Implementations must be cheap to clone the
/// handle of and safe to call concurrently.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Process a user message and return a response.
    async fn process_message(
        &self,
        message: &str,
        context: Option<&Context>,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Capability flags for this provider.
    fn capabilities(&self) -> Capabilities;

    /// Estimated cost of processing `message`, in USD. Never negative.
    fn cost_estimate(&self, message: &str) -> f64;
}
