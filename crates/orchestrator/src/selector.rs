//! Provider selection from a task descriptor.
//!
//! Selection sits behind a trait so a capability- or cost-aware selector
//! can replace the rule table without touching the orchestrator.

use std::sync::Arc;

use provider_core::Provider;

use crate::analyzer::{Complexity, TaskDescriptor};
use crate::registry::ProviderSnapshot;

/// Picks a provider for a task descriptor against a registry snapshot.
///
/// Implementations must be deterministic for a given snapshot.
pub trait SelectProvider: Send + Sync {
    /// The chosen provider, or `None` if no provider can serve the task.
    fn select(
        &self,
        descriptor: &TaskDescriptor,
        providers: &ProviderSnapshot,
    ) -> Option<Arc<dyn Provider>>;
}

/// The static rule table used by default.
///
/// Precedence, first satisfied rule wins:
/// 1. empty registry → none
/// 2. high complexity + code required + "openai" registered → "openai"
/// 3. tools required + "claude" registered → "claude"
/// 4. the first-registered provider
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSelector;

impl RuleSelector {
    /// Create the default rule selector.
    pub fn new() -> Self {
        Self
    }
}

impl SelectProvider for RuleSelector {
    fn select(
        &self,
        descriptor: &TaskDescriptor,
        providers: &ProviderSnapshot,
    ) -> Option<Arc<dyn Provider>> {
        if providers.is_empty() {
            return None;
        }

        if descriptor.complexity == Complexity::High && descriptor.requires_code {
            if let Some(provider) = providers.get("openai") {
                return Some(provider.clone());
            }
        }

        if descriptor.requires_tools {
            if let Some(provider) = providers.get("claude") {
                return Some(provider.clone());
            }
        }

        // Fall back to the first-registered provider; registration order
        // is insertion order, so the pick is stable for a given snapshot.
        providers.values().next().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use async_trait::async_trait;
    use indexmap::IndexMap;
    use provider_core::{Capabilities, Context, ProviderError, ProviderResponse};

    struct Named(&'static str);

    #[async_trait]
    impl Provider for Named {
        async fn process_message(
            &self,
            _message: &str,
            _context: Option<&Context>,
        ) -> Result<ProviderResponse, ProviderError> {
            Ok(ProviderResponse::new("").with_provider(self.0))
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::default()
        }

        fn cost_estimate(&self, _message: &str) -> f64 {
            0.0
        }
    }

    fn snapshot(ids: &[&'static str]) -> ProviderSnapshot {
        let mut providers: ProviderSnapshot = IndexMap::new();
        for id in ids {
            providers.insert(id.to_string(), Arc::new(Named(id)) as Arc<dyn Provider>);
        }
        providers
    }

    async fn selected_id(
        descriptor: &TaskDescriptor,
        providers: &ProviderSnapshot,
    ) -> Option<String> {
        let provider = RuleSelector::new().select(descriptor, providers)?;
        provider
            .process_message("", None)
            .await
            .ok()
            .and_then(|r| r.provider)
    }

    #[tokio::test]
    async fn test_empty_registry_selects_none() {
        let descriptor = analyze("hello");
        assert!(RuleSelector::new().select(&descriptor, &snapshot(&[])).is_none());
    }

    #[tokio::test]
    async fn test_code_task_prefers_openai() {
        let descriptor = analyze("write a python function");
        let providers = snapshot(&["claude", "openai"]);
        assert_eq!(selected_id(&descriptor, &providers).await.as_deref(), Some("openai"));
    }

    #[tokio::test]
    async fn test_tool_task_prefers_claude() {
        let descriptor = analyze("search for rust news");
        let providers = snapshot(&["openai", "claude"]);
        assert_eq!(selected_id(&descriptor, &providers).await.as_deref(), Some("claude"));
    }

    #[tokio::test]
    async fn test_code_rule_outranks_tool_rule() {
        // Message matches both keyword sets; rule 2 is checked first.
        let descriptor = analyze("search for a python function");
        let providers = snapshot(&["claude", "openai"]);
        assert_eq!(selected_id(&descriptor, &providers).await.as_deref(), Some("openai"));
    }

    #[tokio::test]
    async fn test_single_provider_always_selected() {
        let providers = snapshot(&["only"]);
        for message in ["hello", "write python code", "search the web"] {
            let descriptor = analyze(message);
            assert_eq!(selected_id(&descriptor, &providers).await.as_deref(), Some("only"));
        }
    }

    #[tokio::test]
    async fn test_fallback_is_first_registered() {
        let descriptor = analyze("hello");
        let providers = snapshot(&["zeta", "alpha"]);
        assert_eq!(selected_id(&descriptor, &providers).await.as_deref(), Some("zeta"));
    }

    #[tokio::test]
    async fn test_code_task_without_openai_falls_back() {
        let descriptor = analyze("write a python function");
        let providers = snapshot(&["mistral"]);
        assert_eq!(selected_id(&descriptor, &providers).await.as_deref(), Some("mistral"));
    }
}
