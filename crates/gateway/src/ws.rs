//! WebSocket endpoint bridging sockets onto the session state machine.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::Response;
use async_trait::async_trait;

use crate::session::{Duplex, SessionError};
use crate::state::AppState;

/// Upgrade handler for `GET /ws/:client_id`.
///
/// The upgraded socket runs in its own task, so one session's slow
/// dispatch never blocks another session's receive loop.
pub async fn ws_endpoint(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| async move {
        state
            .connections
            .serve(&client_id, WsDuplex { socket }, state.orchestrator.clone())
            .await;
    })
}

/// A WebSocket as a text-frame duplex.
struct WsDuplex {
    socket: WebSocket,
}

#[async_trait]
impl Duplex for WsDuplex {
    async fn recv(&mut self) -> Option<Result<String, SessionError>> {
        loop {
            return match self.socket.recv().await? {
                Ok(Message::Text(text)) => Some(Ok(text)),
                Ok(Message::Close(_)) => None,
                // Control and binary frames are not message envelopes.
                Ok(_) => continue,
                Err(err) => Some(Err(SessionError::Transport(err.to_string()))),
            };
        }
    }

    async fn send(&mut self, text: String) -> Result<(), SessionError> {
        self.socket
            .send(Message::Text(text))
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))
    }
}
