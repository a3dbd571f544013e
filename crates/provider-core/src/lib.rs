//! Core traits and types for pluggable collaborators.
//!
//! This crate provides the shared interfaces consumed by the orchestrator
//! and implemented by concrete backends. It defines:
//!
//! - [`Provider`] - The trait all response-generating backends implement
//! - [`Memory`] - Persistent conversation memory
//! - [`Security`] - User validation and token authentication
//! - [`Tool`] - External tool execution (registered, reserved for future use)
//! - [`ProviderResponse`] / [`MessageRecord`] - Shared data types
//!
//! # Example
//!
//! ```rust
//! use provider_core::{Capabilities, Context, Provider, ProviderError, ProviderResponse};
//! use async_trait::async_trait;
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl Provider for MyProvider {
//!     async fn process_message(
//!         &self,
//!         message: &str,
//!         _context: Option<&Context>,
//!     ) -> Result<ProviderResponse, ProviderError> {
//!         Ok(ProviderResponse::new(format!("You said: {message}")))
//!     }
//!
//!     fn capabilities(&self) -> Capabilities {
//!         Capabilities::default()
//!     }
//!
//!     fn cost_estimate(&self, _message: &str) -> f64 {
//!         0.0
//!     }
//! }
//! ```

mod error;
mod memory;
mod provider;
mod security;
mod tool;

pub use error::ProviderError;
pub use memory::{Memory, MemoryError, MessageRecord, MessageRole};
pub use provider::{Capabilities, Context, Provider, ProviderResponse, TokenUsage};
pub use security::Security;
pub use tool::{Tool, ToolOutcome};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
