use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{Sink, SinkExt, StreamExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info};

use crate::queue::QueueEvent;
use crate::session::CinemaSession;

pub async fn handle_websocket(socket: WebSocket, session: Arc<CinemaSession>) {
    info!("WebSocket connection established for live queue display");

    let (sender, mut receiver) = socket.split();
    let events = session.subscribe().await;

    // Drain incoming messages only to notice the client going away
    let mut input_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Close(_)) => {
                    info!("WebSocket connection closed by client");
                    break;
                }
                Err(e) => {
                    error!("WebSocket error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    let mut output_task = tokio::spawn(forward_snapshots(session, events, sender));

    // Wait for any task to complete, then stop the other
    tokio::select! {
        _ = &mut input_task => {
            debug!("Input task completed");
            output_task.abort();
        }
        _ = &mut output_task => {
            debug!("Output task completed");
            input_task.abort();
        }
    }

    info!("WebSocket connection closed");
}

/// Send the current snapshot, then a fresh one after every queue event.
/// Returns when the sink closes or the event stream ends.
pub async fn forward_snapshots<S>(
    session: Arc<CinemaSession>,
    mut events: UnboundedReceiver<QueueEvent>,
    mut sink: S,
) where
    S: Sink<Message> + Unpin,
{
    loop {
        let snapshot = session.snapshot().await;
        let payload = match serde_json::to_string(&snapshot) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to encode snapshot: {}", e);
                break;
            }
        };
        if sink.send(Message::Text(payload)).await.is_err() {
            debug!("WebSocket sender closed");
            break;
        }

        match events.recv().await {
            Some(event) => debug!("📤 Pushing snapshot after {:?}", event),
            None => break,
        }
    }
}
