//! Mock collaborator implementations for testing and demos.
//!
//! This crate provides concrete implementations of the `provider-core`
//! contracts with no external dependencies:
//!
//! - [`EchoProvider`] - Echoes messages back, tagged with its identifier
//! - [`StaticProvider`] - Always returns a fixed reply
//! - [`FailingProvider`] - Always fails, for error-path testing
//! - [`InMemoryStore`] - A `Memory` keeping records in process memory
//! - [`AllowListSecurity`] - A `Security` backed by static user/token tables
//!
//! For production AI processing, implement `Provider` against a real
//! backend instead.
//!
//! # Example
//!
//! ```rust
//! use mock_provider::{EchoProvider, Provider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = EchoProvider::named("mock");
//!     let response = provider.process_message("Hello!", None).await.unwrap();
//!     assert_eq!(response.content, "Processed by mock: Hello!");
//! }
//! ```

mod memory;
mod providers;
mod security;

pub use memory::InMemoryStore;
pub use providers::{EchoProvider, FailingProvider, StaticProvider};
pub use security::AllowListSecurity;

// Re-export contract types for convenience
pub use provider_core::{
    Capabilities, Context, Memory, MessageRecord, MessageRole, Provider, ProviderError,
    ProviderResponse, Security,
};
