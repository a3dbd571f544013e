//! Tool execution contract.
//!
//! Tools are registered alongside providers but are not consulted by the
//! routing decision; the registry exists so backends can discover them.

use async_trait::async_trait;
use serde_json::Value;

use crate::provider::Context;

/// Result of a tool execution.
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    /// Result content, surfaced to the caller.
    pub content: String,
    /// Whether the execution succeeded.
    pub success: bool,
}

impl ToolOutcome {
    /// Create a successful outcome.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed outcome.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            content: format!("Error: {}", error.into()),
            success: false,
        }
    }
}

/// An executable tool with a self-describing parameter schema.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with the given parameters.
    async fn execute(&self, params: &Context, context: Option<&Context>) -> ToolOutcome;

    /// JSON schema describing the accepted parameters.
    fn schema(&self) -> Value;
}
