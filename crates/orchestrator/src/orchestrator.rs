//! Main orchestrator that coordinates message dispatch.

use std::sync::Arc;

use tracing::{debug, info, warn};

use provider_core::{
    Context, Memory, MessageRecord, MessageRole, Provider, ProviderResponse, Security, Tool,
};

use crate::analyzer::analyze;
use crate::error::DispatchError;
use crate::outcome::{ConversationId, Outcome};
use crate::registry::{ProviderRegistry, ToolRegistry};
use crate::selector::{RuleSelector, SelectProvider};

/// Routes inbound messages to registered providers, coordinating the
/// optional memory and security collaborators around each dispatch.
///
/// All state is shared and safe to touch concurrently: registration can
/// happen before or after dispatch traffic begins, and dispatch calls
/// never serialize against each other. The orchestrator holds no
/// conversation state; callers pass the conversation identity in.
pub struct Orchestrator {
    /// Provider registry, read on every dispatch.
    providers: ProviderRegistry,
    /// Tool registry; stored but not consulted by dispatch.
    tools: ToolRegistry,
    /// Optional persistent conversation memory.
    memory: tokio::sync::RwLock<Option<Arc<dyn Memory>>>,
    /// Optional user validation.
    security: tokio::sync::RwLock<Option<Arc<dyn Security>>>,
    /// Provider selection policy.
    selector: Box<dyn SelectProvider>,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    /// Create an orchestrator with the default rule-table selector and
    /// no collaborators.
    pub fn new() -> Self {
        Self::with_selector(Box::new(RuleSelector::new()))
    }

    /// Create an orchestrator with a custom selection policy.
    pub fn with_selector(selector: Box<dyn SelectProvider>) -> Self {
        Self {
            providers: ProviderRegistry::new(),
            tools: ToolRegistry::new(),
            memory: tokio::sync::RwLock::new(None),
            security: tokio::sync::RwLock::new(None),
            selector,
        }
    }

    /// Register a provider under `id`; last write wins.
    pub async fn register_provider(&self, id: impl Into<String>, provider: Arc<dyn Provider>) {
        self.providers.register(id, provider).await;
    }

    /// Register a tool under `id`; last write wins.
    pub async fn register_tool(&self, id: impl Into<String>, tool: Arc<dyn Tool>) {
        self.tools.register(id, tool).await;
    }

    /// Set the memory collaborator.
    pub async fn set_memory(&self, memory: Arc<dyn Memory>) {
        info!("Memory collaborator set");
        *self.memory.write().await = Some(memory);
    }

    /// Set the security collaborator.
    pub async fn set_security(&self, security: Arc<dyn Security>) {
        info!("Security collaborator set");
        *self.security.write().await = Some(security);
    }

    /// The provider registry.
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// The tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Dispatch one message end-to-end.
    ///
    /// Side effects are strictly ordered within the call: the user-role
    /// memory write precedes provider invocation, and the assistant-role
    /// write happens only after a successful provider response. Failures
    /// never escape as panics or `Err`; they travel inside the outcome.
    pub async fn dispatch(
        &self,
        message: &str,
        user_id: &str,
        context: Option<Context>,
        conversation: &ConversationId,
    ) -> Outcome {
        let result = self
            .dispatch_inner(message, user_id, context, conversation)
            .await;
        Outcome::stamp(conversation, result)
    }

    async fn dispatch_inner(
        &self,
        message: &str,
        user_id: &str,
        context: Option<Context>,
        conversation: &ConversationId,
    ) -> Result<ProviderResponse, DispatchError> {
        // 1. Validate the user, if a security collaborator is set.
        let security = self.security.read().await.clone();
        if let Some(security) = security {
            if !security.validate_user(user_id).await {
                warn!(user = %user_id, "Unauthorized access attempt");
                return Err(DispatchError::Unauthorized);
            }
        }

        let memory = self.memory.read().await.clone();

        // 2. Record the user message before any provider runs.
        if let Some(memory) = &memory {
            let record =
                MessageRecord::new(MessageRole::User, message, user_id, context.clone());
            if let Err(err) = memory.store_message(record).await {
                warn!("Failed to store user message: {}", err);
            }
        }

        // 3. Classify, then select against a consistent registry snapshot.
        let descriptor = analyze(message);
        debug!(?descriptor, conversation = %conversation, "Task analyzed");

        let snapshot = self.providers.snapshot().await;
        let Some(provider) = self.selector.select(&descriptor, &snapshot) else {
            warn!("No suitable provider available for the task");
            return Err(DispatchError::NoProviderAvailable);
        };

        // 4. Invoke the provider; its failure text becomes the outcome.
        let response = match provider.process_message(message, context.as_ref()).await {
            Ok(response) => response,
            Err(err) => {
                warn!("Provider failed: {}", err);
                return Err(DispatchError::Provider(err.to_string()));
            }
        };

        // 5. Record the assistant response only after success.
        if let Some(memory) = &memory {
            let record = MessageRecord::new(
                MessageRole::Assistant,
                response.content.clone(),
                user_id,
                context,
            );
            if let Err(err) = memory.store_message(record).await {
                warn!("Failed to store assistant message: {}", err);
            }
        }

        info!(
            provider = response.provider.as_deref().unwrap_or("unknown"),
            chars = response.content.len(),
            "Dispatch completed"
        );
        Ok(response)
    }
}
