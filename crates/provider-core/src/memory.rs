//! Persistent conversation memory contracts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::provider::Context;

/// Who authored a stored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// The end user.
    User,
    /// A provider responding on behalf of the system.
    Assistant,
}

/// One message as handed to the memory collaborator.
///
/// The orchestrator constructs records at hand-off time and does not
/// retain them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Role of the message author.
    pub role: MessageRole,
    /// Message content.
    pub content: String,
    /// Identifier of the user the conversation belongs to.
    pub user_id: String,
    /// Per-request context, if the caller supplied one.
    pub context: Option<Context>,
    /// When the record was created.
    pub timestamp: DateTime<Utc>,
}

impl MessageRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        role: MessageRole,
        content: impl Into<String>,
        user_id: impl Into<String>,
        context: Option<Context>,
    ) -> Self {
        Self {
            role,
            content: content.into(),
            user_id: user_id.into(),
            context,
            timestamp: Utc::now(),
        }
    }
}

/// Errors returned by memory collaborators.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// Storage or retrieval failure.
    #[error("memory store error: {0}")]
    Store(String),
}

/// Persistent conversation memory.
///
/// Implementations shared across concurrent dispatches must preserve each
/// user's message ordering themselves; callers only guarantee ordering of
/// the writes within a single dispatch.
#[async_trait]
pub trait Memory: Send + Sync {
    /// Store one message record.
    async fn store_message(&self, record: MessageRecord) -> Result<(), MemoryError>;

    /// Conversation history for a user, oldest first, optionally limited
    /// to the most recent `limit` records.
    async fn conversation_history(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<MessageRecord>, MemoryError>;

    /// Drop all stored records for a user.
    async fn clear_conversation(&self, user_id: &str) -> Result<(), MemoryError>;
}
