//! HTTP and WebSocket gateway over the orchestrator.
//!
//! Two entry points share one dispatch path:
//!
//! - `POST /api/messages` - single-shot request/response, bearer-token
//!   authenticated through the security collaborator
//! - `GET /ws/:client_id` - long-lived duplex session; each inbound frame
//!   is dispatched and its outcome written back on the same session
//!
//! Session lifecycles are owned by the [`ConnectionManager`]; one
//! session's fault never affects another.

mod config;
mod error;
mod routes;
mod session;
mod state;
mod wire;
mod ws;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use routes::router;
pub use session::{ConnectionManager, Duplex, SessionError, MALFORMED_FRAME_ERROR};
pub use state::AppState;
pub use wire::{MessageRequest, MessageResponse};
