//! Wire types for both boundaries.

use serde::{Deserialize, Serialize};

use orchestrator::Outcome;
use provider_core::{Context, TokenUsage};

/// An inbound message envelope, shared by the HTTP body and each duplex
/// frame.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    /// The user message to process.
    pub message: String,
    /// Identifier of the sending user.
    pub user_id: String,
    /// Optional per-request context, passed through untouched.
    #[serde(default)]
    pub context: Option<Context>,
}

/// An outbound response envelope mirroring a dispatch outcome.
///
/// Success carries the provider's content and metadata; failure carries
/// empty content plus the error text. Both carry the conversation
/// identity and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub conversation_id: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    /// Mirror a dispatch outcome into the wire shape.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let conversation_id = outcome.conversation_id.to_string();
        let timestamp = outcome.timestamp.to_rfc3339();

        match &outcome.result {
            Ok(response) => Self {
                content: response.content.clone(),
                provider: response.provider.clone(),
                model: response.model.clone(),
                conversation_id,
                timestamp,
                tokens: response.tokens,
                error: None,
            },
            Err(err) => Self {
                content: String::new(),
                provider: None,
                model: None,
                conversation_id,
                timestamp,
                tokens: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchestrator::{ConversationId, DispatchError};
    use provider_core::ProviderResponse;

    #[test]
    fn test_request_requires_message_and_user_id() {
        assert!(serde_json::from_str::<MessageRequest>(r#"{"message": "hi"}"#).is_err());
        assert!(serde_json::from_str::<MessageRequest>(r#"{"user_id": "u"}"#).is_err());
        let request: MessageRequest =
            serde_json::from_str(r#"{"message": "hi", "user_id": "u"}"#).unwrap();
        assert_eq!(request.message, "hi");
        assert!(request.context.is_none());
    }

    #[test]
    fn test_success_outcome_shape() {
        let conversation = ConversationId::new();
        let outcome = Outcome::stamp(
            &conversation,
            Ok(ProviderResponse::new("hello").with_provider("p1")),
        );

        let response = MessageResponse::from_outcome(&outcome);
        assert_eq!(response.content, "hello");
        assert_eq!(response.provider.as_deref(), Some("p1"));
        assert_eq!(response.conversation_id, conversation.to_string());
        assert!(response.error.is_none());

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("error").is_none());
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn test_failure_outcome_shape() {
        let outcome = Outcome::stamp(
            &ConversationId::new(),
            Err(DispatchError::NoProviderAvailable),
        );

        let response = MessageResponse::from_outcome(&outcome);
        assert_eq!(response.content, "");
        assert!(response.provider.is_none());
        assert_eq!(
            response.error.as_deref(),
            Some("No suitable provider available")
        );
    }
}
