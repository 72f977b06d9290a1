use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::select;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};

use crate::api::routes::AppState;

// WebSocket handler - accepts upgrade and handles the connection
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// One task per kitchen display: subscribe on connect, forward serialized hub
/// events, and exit (unsubscribing) when the client goes away. No
/// client-to-server messages are defined on this channel.
async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let mut events = state.hub.subscribe();
    info!("kitchen display connected");

    loop {
        select! {
            result = events.recv() => {
                match result {
                    Ok(msg) => {
                        if let Ok(json) = serde_json::to_string(&msg) {
                            if socket.send(Message::Text(json.into())).await.is_err() {
                                break;
                            }
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        // Displays re-fetch the full list on each event, so
                        // skipping ahead after falling behind is safe.
                        debug!(skipped, "kitchen display lagged behind broadcasts");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            result = socket.recv() => {
                match result {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // Ignore other message types (text, binary, ping, pong)
                    _ => {}
                }
            }
        }
    }

    info!("kitchen display disconnected");
}
