//! WebSocket Handler
//!
//! Upgrades `/ws` requests and runs one dashboard session per connection.
//! Input events of a session are handled one at a time, in arrival order.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::{SessionError, SessionId};
use super::messages::{parse_input, ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::view::{dispatch, render_all, FilterState};

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let session_id = match start_session(&state, tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register dashboard session");
            let error_msg = ServerMessage::Error {
                message: e.to_string(),
            };
            if let Ok(text) = serde_json::to_string(&error_msg) {
                let _ = sender.send(Message::Text(text)).await;
            }
            return;
        }
    };

    let id_for_send = session_id.clone();

    // Task to forward messages from channel to WebSocket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            session_id = %id_for_send,
                            "WebSocket send failed, closing session"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let state_for_recv = Arc::clone(&state);
    let id_for_recv = session_id.clone();

    // Task to receive input events and push recomputed outputs
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(&state_for_recv, &id_for_recv, msg).await {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        session_id = %id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    state.sessions.unregister(&session_id).await;
}

/// Register a session and queue its greeting and first render
///
/// Both go through the session channel so they reach the socket in order,
/// ahead of any update triggered by input.
async fn start_session(
    state: &AppState,
    sender: mpsc::UnboundedSender<ServerMessage>,
) -> Result<SessionId, SessionError> {
    let initial = FilterState::default_for(&state.dataset);
    let session_id = state.sessions.register(sender, initial.clone()).await?;

    let greeting = ServerMessage::Connected {
        session_id: session_id.clone(),
    };
    let first_render = ServerMessage::Update {
        outputs: render_all(&state.dataset, &initial),
    };
    for message in [greeting, first_render] {
        if let Err(e) = state.sessions.send_to(&session_id, message).await {
            state.sessions.unregister(&session_id).await;
            return Err(e);
        }
    }

    Ok(session_id)
}

/// Handle a received WebSocket message
///
/// Returns false if the connection should be closed.
async fn handle_ws_message(state: &AppState, session_id: &str, message: Message) -> bool {
    match message {
        Message::Text(text) => {
            match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => handle_client_message(state, session_id, client_msg).await,
                Err(e) => {
                    tracing::debug!(
                        session_id = %session_id,
                        error = %e,
                        text = %text,
                        "Invalid client message"
                    );
                    let error_msg = ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    };
                    let _ = state.sessions.send_to(session_id, error_msg).await;
                }
            }
            true
        }
        Message::Binary(_) => {
            let error_msg = ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            };
            let _ = state.sessions.send_to(session_id, error_msg).await;
            true
        }
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            tracing::debug!(session_id = %session_id, "Client requested close");
            false
        }
    }
}

/// Handle a parsed client message
async fn handle_client_message(state: &AppState, session_id: &str, message: ClientMessage) {
    match message {
        ClientMessage::Input { id, value } => {
            let outcome = match parse_input(id, value) {
                Ok(event) => state.sessions.apply(session_id, event).await,
                Err(e) => Err(e),
            };

            let response = match outcome {
                Ok((changed, filter)) => ServerMessage::Update {
                    outputs: dispatch(&state.dataset, &filter, changed),
                },
                Err(e) => {
                    tracing::debug!(session_id = %session_id, error = %e, "Input rejected");
                    ServerMessage::Error {
                        message: e.to_string(),
                    }
                }
            };
            let _ = state.sessions.send_to(session_id, response).await;
        }
        ClientMessage::Ping => {
            let _ = state.sessions.send_to(session_id, ServerMessage::Pong).await;
        }
    }
}
