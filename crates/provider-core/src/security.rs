//! Security collaborator contract.

use async_trait::async_trait;

/// User validation, token authentication, and action authorization.
///
/// `authorize_action` is part of the contract but is not invoked by the
/// dispatch path today; it is reserved for per-action policies.
#[async_trait]
pub trait Security: Send + Sync {
    /// Whether `user_id` is allowed to use the system.
    async fn validate_user(&self, user_id: &str) -> bool;

    /// Resolve a bearer token to the user it belongs to, if valid.
    async fn authenticate_token(&self, token: &str) -> Option<String>;

    /// Whether `user_id` may perform `action`, optionally on `resource`.
    async fn authorize_action(&self, user_id: &str, action: &str, resource: Option<&str>) -> bool;
}
