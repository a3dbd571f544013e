//! Dispatch outcome and conversation identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use provider_core::ProviderResponse;

use crate::error::DispatchError;

/// Identity of one logical conversation.
///
/// Minted by the boundary (one per duplex session, one per single-shot
/// request) and passed into `dispatch`; the orchestrator holds no
/// conversation state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(String);

impl ConversationId {
    /// Mint a fresh conversation identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of one dispatch call, stamped with time and conversation.
///
/// Dispatch itself never fails; failures travel inside `result`.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Conversation the call belonged to.
    pub conversation_id: ConversationId,
    /// When the outcome was produced.
    pub timestamp: DateTime<Utc>,
    /// The provider response, or the terminal dispatch failure.
    pub result: Result<ProviderResponse, DispatchError>,
}

impl Outcome {
    /// Stamp a result with the current time and a conversation identity.
    pub fn stamp(
        conversation: &ConversationId,
        result: Result<ProviderResponse, DispatchError>,
    ) -> Self {
        Self {
            conversation_id: conversation.clone(),
            timestamp: Utc::now(),
            result,
        }
    }
}
