//! Duplex session lifecycle and the connection manager.
//!
//! Each session moves through Connecting → Open → {Closed | Failed}.
//! The receive loop is generic over a [`Duplex`] transport so the axum
//! WebSocket and in-memory channel pairs (tests) share the exact same
//! state machine.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use orchestrator::{ConversationId, Orchestrator};

use crate::wire::{MessageRequest, MessageResponse};

/// Error payload text for frames missing required fields.
pub const MALFORMED_FRAME_ERROR: &str =
    "Invalid message format. Must include 'message' and 'user_id'.";

/// Transport-level fault on one session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the peer failed.
    #[error("transport error: {0}")]
    Transport(String),
}

/// A duplex text-frame transport.
///
/// `recv` returns `None` on a clean disconnect and `Some(Err(_))` on a
/// fault; `send` writes one frame.
#[async_trait]
pub trait Duplex: Send {
    /// Receive the next inbound frame.
    async fn recv(&mut self) -> Option<Result<String, SessionError>>;

    /// Write one outbound frame.
    async fn send(&mut self, text: String) -> Result<(), SessionError>;
}

/// Tracks open duplex sessions and runs their receive loops.
///
/// Sessions are identified by a caller-supplied id, unique among open
/// sessions. A duplicate id is refused: the new connection gets one
/// error payload and is dropped while the existing session continues
/// untouched. Ids become reusable after closure.
#[derive(Default)]
pub struct ConnectionManager {
    sessions: RwLock<HashSet<String>>,
}

impl ConnectionManager {
    /// Create a manager with no open sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open sessions.
    pub async fn open_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether a session id is currently open.
    pub async fn is_open(&self, session_id: &str) -> bool {
        self.sessions.read().await.contains(session_id)
    }

    async fn register(&self, session_id: &str) -> bool {
        self.sessions.write().await.insert(session_id.to_string())
    }

    async fn deregister(&self, session_id: &str) {
        self.sessions.write().await.remove(session_id);
    }

    /// Drive one session from accept to close.
    ///
    /// Frames are processed strictly in arrival order; malformed frames
    /// are answered and the session stays open. On an unexpected fault
    /// the peer gets one best-effort error payload, then the session is
    /// deregistered. Faults never escape this call.
    pub async fn serve<D: Duplex>(
        &self,
        session_id: &str,
        mut duplex: D,
        orchestrator: Arc<Orchestrator>,
    ) {
        if !self.register(session_id).await {
            warn!(session = %session_id, "Rejecting duplicate session id");
            let _ = duplex.send(error_payload("Session id already in use")).await;
            return;
        }
        info!(session = %session_id, "Session opened");

        let conversation = ConversationId::new();
        match run_loop(&mut duplex, &orchestrator, &conversation).await {
            Ok(()) => info!(session = %session_id, "Session closed"),
            Err(err) => {
                warn!(session = %session_id, "Session failed: {}", err);
                // Best-effort notification; the peer may already be gone.
                let _ = duplex
                    .send(error_payload(&format!("Server error: {}", err)))
                    .await;
            }
        }

        self.deregister(session_id).await;
    }
}

/// The Open self-loop: frames in arrival order, one at a time.
async fn run_loop<D: Duplex>(
    duplex: &mut D,
    orchestrator: &Orchestrator,
    conversation: &ConversationId,
) -> Result<(), SessionError> {
    while let Some(frame) = duplex.recv().await {
        let text = frame?;

        let request: MessageRequest = match serde_json::from_str(&text) {
            Ok(request) => request,
            Err(_) => {
                duplex.send(error_payload(MALFORMED_FRAME_ERROR)).await?;
                continue;
            }
        };

        let outcome = orchestrator
            .dispatch(
                &request.message,
                &request.user_id,
                request.context,
                conversation,
            )
            .await;

        let payload = serde_json::to_string(&MessageResponse::from_outcome(&outcome))
            .map_err(|err| SessionError::Transport(err.to_string()))?;
        duplex.send(payload).await?;
    }

    Ok(())
}

fn error_payload(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
