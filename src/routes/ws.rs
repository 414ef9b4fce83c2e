// WebSocket drilldown: each connection owns a navigation state, applies the
// selections the client sends and pushes a freshly computed view after each one.

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;
use tokio::time::{Duration, timeout};

use super::AppState;
use crate::dataset::Dataset;
use crate::models::ViewModel;
use crate::navigator::{DrilldownState, Selection};
use crate::view::compute_view;

/// Server -> client message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub(crate) enum Outbound {
    View {
        state: DrilldownState,
        view: Box<ViewModel>,
    },
    Error {
        message: String,
    },
}

pub(super) async fn ws_drilldown(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let dataset = state.dataset.clone();
    let ping_interval = Duration::from_secs(state.config.websocket.ping_interval_secs);
    let send_timeout = Duration::from_secs(state.config.websocket.send_timeout_secs);
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = stream_drilldown(socket, dataset, ping_interval, send_timeout).await {
            tracing::info!("Drilldown stream error: {}", e);
        }
    })
}

/// Sends one message; `false` means the client is gone or too slow.
async fn send(socket: &mut WebSocket, msg: Message, send_timeout: Duration) -> bool {
    let r = timeout(send_timeout, socket.send(msg)).await;
    matches!(r, Ok(Ok(())))
}

fn view_message(nav: &DrilldownState, dataset: &Dataset) -> anyhow::Result<Message> {
    let out = Outbound::View {
        state: nav.clone(),
        view: Box::new(compute_view(nav, dataset)),
    };
    Ok(Message::Text(serde_json::to_string(&out)?.into()))
}

fn error_message(message: String) -> anyhow::Result<Message> {
    let out = Outbound::Error { message };
    Ok(Message::Text(serde_json::to_string(&out)?.into()))
}

async fn stream_drilldown(
    mut socket: WebSocket,
    dataset: Arc<Dataset>,
    ping_every: Duration,
    send_timeout: Duration,
) -> anyhow::Result<()> {
    tracing::info!("Client connected to drilldown stream");
    let mut nav = DrilldownState::new();

    if !send(&mut socket, view_message(&nav, &dataset)?, send_timeout).await {
        return Ok(());
    }

    let mut ping_interval = tokio::time::interval(ping_every);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // First tick completes immediately.
    ping_interval.tick().await;
    loop {
        tokio::select! {
            incoming = socket.recv() => {
                let text = match incoming {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e.into()),
                };
                let reply = match serde_json::from_str::<Selection>(text.as_str()) {
                    Ok(selection) => match nav.apply(selection) {
                        Ok(()) => view_message(&nav, &dataset)?,
                        Err(e) => {
                            tracing::warn!("Rejected drilldown event: {}", e);
                            error_message(e.to_string())?
                        }
                    },
                    Err(e) => {
                        tracing::warn!("Malformed drilldown event: {}", e);
                        error_message(format!("malformed event: {}", e))?
                    }
                };
                if !send(&mut socket, reply, send_timeout).await {
                    break;
                }
            }
            _ = ping_interval.tick() => {
                if !send(&mut socket, Message::Ping(Bytes::new()), send_timeout).await {
                    break;
                }
            }
        }
    }
    tracing::info!("Client disconnected from drilldown stream");
    Ok(())
}
