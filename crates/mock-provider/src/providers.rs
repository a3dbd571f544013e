//! Mock provider implementations.

use async_trait::async_trait;

use provider_core::{Capabilities, Context, Provider, ProviderError, ProviderResponse};

/// Per-character cost used by the mock cost estimator.
const COST_PER_CHAR: f64 = 0.001;

/// Echoes the inbound message back, tagged with the provider's identity.
///
/// Capabilities mirror the conventional backends: an echo provider named
/// "openai" advertises code generation, one named "claude" advertises
/// tool use.
#[derive(Debug, Clone)]
pub struct EchoProvider {
    id: String,
}

impl EchoProvider {
    /// Create an echo provider reporting the given identifier.
    pub fn named(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Provider for EchoProvider {
    async fn process_message(
        &self,
        message: &str,
        _context: Option<&Context>,
    ) -> Result<ProviderResponse, ProviderError> {
        Ok(
            ProviderResponse::new(format!("Processed by {}: {}", self.id, message))
                .with_provider(&self.id)
                .with_model("mock-model"),
        )
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            text_generation: true,
            code_generation: self.id == "openai",
            tool_use: self.id == "claude",
            reasoning: true,
        }
    }

    fn cost_estimate(&self, message: &str) -> f64 {
        COST_PER_CHAR * message.len() as f64
    }
}

/// Always returns the same reply, regardless of input.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    id: String,
    reply: String,
}

impl StaticProvider {
    /// Create a static provider with a fixed reply.
    pub fn new(id: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Provider for StaticProvider {
    async fn process_message(
        &self,
        _message: &str,
        _context: Option<&Context>,
    ) -> Result<ProviderResponse, ProviderError> {
        Ok(ProviderResponse::new(&self.reply).with_provider(&self.id))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            text_generation: true,
            ..Capabilities::default()
        }
    }

    fn cost_estimate(&self, _message: &str) -> f64 {
        0.0
    }
}

/// Always fails with the configured message.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    error: String,
}

impl FailingProvider {
    /// Create a provider that fails with the given error text.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[async_trait]
impl Provider for FailingProvider {
    async fn process_message(
        &self,
        _message: &str,
        _context: Option<&Context>,
    ) -> Result<ProviderResponse, ProviderError> {
        Err(ProviderError::Backend(self.error.clone()))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    fn cost_estimate(&self, _message: &str) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_tags_identity() {
        let provider = EchoProvider::named("mock");
        let response = provider.process_message("Hi", None).await.unwrap();
        assert_eq!(response.content, "Processed by mock: Hi");
        assert_eq!(response.provider.as_deref(), Some("mock"));
        assert_eq!(response.model.as_deref(), Some("mock-model"));
    }

    #[test]
    fn test_echo_capabilities_follow_identity() {
        assert!(EchoProvider::named("openai").capabilities().code_generation);
        assert!(!EchoProvider::named("openai").capabilities().tool_use);
        assert!(EchoProvider::named("claude").capabilities().tool_use);
        assert!(!EchoProvider::named("claude").capabilities().code_generation);
    }

    #[test]
    fn test_echo_cost_scales_with_length() {
        let provider = EchoProvider::named("mock");
        assert_eq!(provider.cost_estimate(""), 0.0);
        assert!(provider.cost_estimate("ten chars!") > provider.cost_estimate("short"));
    }

    #[tokio::test]
    async fn test_static_ignores_input() {
        let provider = StaticProvider::new("static", "fixed");
        let a = provider.process_message("one", None).await.unwrap();
        let b = provider.process_message("two", None).await.unwrap();
        assert_eq!(a.content, "fixed");
        assert_eq!(b.content, "fixed");
    }

    #[tokio::test]
    async fn test_failing_always_fails() {
        let provider = FailingProvider::new("down for maintenance");
        let err = provider.process_message("Hi", None).await.unwrap_err();
        assert!(err.to_string().contains("down for maintenance"));
    }
}
