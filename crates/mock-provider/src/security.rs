//! Static-table security collaborator.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use provider_core::Security;

/// A `Security` backed by static allow and token tables.
///
/// Users on the allow list pass `validate_user`; tokens resolve to the
/// user they were issued for. `authorize_action` falls back to user
/// validity.
#[derive(Debug, Clone, Default)]
pub struct AllowListSecurity {
    users: HashSet<String>,
    tokens: HashMap<String, String>,
}

impl AllowListSecurity {
    /// Create a security collaborator allowing the given users.
    pub fn allowing<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            users: users.into_iter().map(Into::into).collect(),
            tokens: HashMap::new(),
        }
    }

    /// Issue a bearer token for a user. The user is also added to the
    /// allow list.
    pub fn with_token(mut self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        self.users.insert(user_id.clone());
        self.tokens.insert(token.into(), user_id);
        self
    }
}

#[async_trait]
impl Security for AllowListSecurity {
    async fn validate_user(&self, user_id: &str) -> bool {
        self.users.contains(user_id)
    }

    async fn authenticate_token(&self, token: &str) -> Option<String> {
        self.tokens.get(token).cloned()
    }

    async fn authorize_action(&self, user_id: &str, _action: &str, _resource: Option<&str>) -> bool {
        self.validate_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_allow_list() {
        let security = AllowListSecurity::allowing(["valid_user"]);
        assert!(security.validate_user("valid_user").await);
        assert!(!security.validate_user("intruder").await);
    }

    #[tokio::test]
    async fn test_token_resolves_to_user() {
        let security = AllowListSecurity::default().with_token("secret-token", "alice");
        assert_eq!(
            security.authenticate_token("secret-token").await.as_deref(),
            Some("alice")
        );
        assert!(security.authenticate_token("wrong").await.is_none());
        // Issuing a token also allows the user.
        assert!(security.validate_user("alice").await);
    }

    #[tokio::test]
    async fn test_authorize_follows_validity() {
        let security = AllowListSecurity::allowing(["alice"]);
        assert!(security.authorize_action("alice", "read", None).await);
        assert!(!security.authorize_action("bob", "read", Some("doc")).await);
    }
}
