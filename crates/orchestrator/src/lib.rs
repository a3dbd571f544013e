//! Message orchestrator coordinating analysis, selection, and dispatch.
//!
//! This crate provides the [`Orchestrator`] type which routes an inbound
//! user message to one of several registered providers, coordinating the
//! optional memory and security collaborators around the dispatch.
//!
//! # Architecture
//!
//! ```text
//! dispatch(message, user_id, context, conversation)
//!          ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │                     ORCHESTRATOR                        │
//! │                                                         │
//! │  1. Security.validate_user (if set)                     │
//! │         ↓                                               │
//! │  2. Memory.store_message(user, ...) (if set)            │
//! │         ↓                                               │
//! │  3. analyze(message) → TaskDescriptor                   │
//! │         ↓                                               │
//! │  4. Selector.select(descriptor, registry snapshot)      │
//! │         ↓                                               │
//! │  5. Provider.process_message(message, context)          │
//! │         ↓                                               │
//! │  6. Memory.store_message(assistant, ...) (on success)   │
//! │         ↓                                               │
//! │  7. Outcome stamped with timestamp + conversation id    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use orchestrator::{ConversationId, Orchestrator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let orchestrator = Orchestrator::new();
//!     orchestrator.register_provider("openai", Arc::new(MyProvider)).await;
//!
//!     let conversation = ConversationId::new();
//!     let outcome = orchestrator
//!         .dispatch("write a python function", "user-1", None, &conversation)
//!         .await;
//!
//!     match outcome.result {
//!         Ok(response) => println!("{}", response.content),
//!         Err(err) => eprintln!("{}", err),
//!     }
//! }
//! ```

mod analyzer;
mod error;
mod orchestrator;
mod outcome;
mod registry;
mod selector;

pub use analyzer::{analyze, Complexity, TaskDescriptor};
pub use error::DispatchError;
pub use orchestrator::Orchestrator;
pub use outcome::{ConversationId, Outcome};
pub use registry::{ProviderRegistry, ProviderSnapshot, ToolRegistry};
pub use selector::{RuleSelector, SelectProvider};

// Re-export commonly used types from the contracts crate
pub use provider_core::{Context, Memory, Provider, ProviderResponse, Security, Tool};
