use crate::registry::ClientHandle;
use crate::signaling::MatchmakingService;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tandem_core::ProtocolError;
use tracing::{debug, info};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<MatchmakingService>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, service))
}

async fn handle_socket(socket: WebSocket, service: MatchmakingService) {
    let (mut sender, mut receiver) = socket.split();
    let (handle, mut rx) = ClientHandle::channel();

    let client_id = service.connect(handle);
    info!("New WebSocket connection: {}", client_id);

    let mut send_task = tokio::spawn(async move {
        while let Some(text) = rx.recv().await {
            if sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                let outcome = match msg {
                    Message::Text(text) => service.handle_text(client_id, text.as_str()).await,
                    Message::Binary(data) => match std::str::from_utf8(&data) {
                        Ok(text) => service.handle_text(client_id, text).await,
                        Err(_) => service.reject(client_id, ProtocolError::Malformed),
                    },
                    Message::Close(_) => break,
                    _ => continue,
                };
                debug!("Frame from {}: {:?}", client_id, outcome);
            }
        }
    });

    let reader_done = tokio::select! {
        _ = (&mut send_task) => false,
        _ = (&mut recv_task) => true,
    };

    // the other task must be gone before teardown, or a frame it is still
    // routing could land after disconnect
    if reader_done {
        send_task.abort();
        let _ = send_task.await;
    } else {
        recv_task.abort();
        let _ = recv_task.await;
    }

    service.disconnect(client_id).await;
    info!("WebSocket disconnected: {}", client_id);
}
