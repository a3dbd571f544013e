//! In-process conversation memory.

use async_trait::async_trait;
use tokio::sync::RwLock;

use provider_core::{Memory, MemoryError, MessageRecord};

/// A `Memory` that keeps every record in process memory.
///
/// Records are appended under one lock, so per-user ordering follows
/// store order even under concurrent dispatches.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<MessageRecord>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored records in store order, for assertions in tests.
    pub async fn records(&self) -> Vec<MessageRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl Memory for InMemoryStore {
    async fn store_message(&self, record: MessageRecord) -> Result<(), MemoryError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn conversation_history(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<MessageRecord>, MemoryError> {
        let records = self.records.read().await;
        let history: Vec<MessageRecord> = records
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();

        Ok(match limit {
            Some(limit) if limit < history.len() => {
                history[history.len() - limit..].to_vec()
            }
            _ => history,
        })
    }

    async fn clear_conversation(&self, user_id: &str) -> Result<(), MemoryError> {
        self.records
            .write()
            .await
            .retain(|record| record.user_id != user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provider_core::MessageRole;

    fn record(role: MessageRole, content: &str, user: &str) -> MessageRecord {
        MessageRecord::new(role, content, user, None)
    }

    #[tokio::test]
    async fn test_history_is_per_user_and_ordered() {
        let store = InMemoryStore::new();
        store
            .store_message(record(MessageRole::User, "a1", "alice"))
            .await
            .unwrap();
        store
            .store_message(record(MessageRole::User, "b1", "bob"))
            .await
            .unwrap();
        store
            .store_message(record(MessageRole::Assistant, "a2", "alice"))
            .await
            .unwrap();

        let history = store.conversation_history("alice", None).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "a1");
        assert_eq!(history[1].content, "a2");
    }

    #[tokio::test]
    async fn test_limit_keeps_most_recent() {
        let store = InMemoryStore::new();
        for n in 0..5 {
            store
                .store_message(record(MessageRole::User, &format!("m{n}"), "alice"))
                .await
                .unwrap();
        }

        let history = store.conversation_history("alice", Some(2)).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "m3");
        assert_eq!(history[1].content, "m4");
    }

    #[tokio::test]
    async fn test_clear_only_touches_one_user() {
        let store = InMemoryStore::new();
        store
            .store_message(record(MessageRole::User, "a", "alice"))
            .await
            .unwrap();
        store
            .store_message(record(MessageRole::User, "b", "bob"))
            .await
            .unwrap();

        store.clear_conversation("alice").await.unwrap();
        assert!(store
            .conversation_history("alice", None)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(store.conversation_history("bob", None).await.unwrap().len(), 1);
    }
}
