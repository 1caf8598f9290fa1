// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::hub::notification_hub::NotificationHub;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::Extension;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// 将 HTTP 请求升级为 WebSocket 连接
pub async fn ws_upgrade(
    ws: WebSocketUpgrade,
    Extension(hub): Extension<Arc<NotificationHub>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

/// 服务单个 WebSocket 连接直到对端断开
///
/// 订阅者的出站帧统一走同一条 mpsc 通道，广播与请求应答
/// 因此在连接内保持有序。
async fn handle_socket(socket: WebSocket, hub: Arc<NotificationHub>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let subscriber_id = hub.register(tx.clone());
    debug!(%subscriber_id, "websocket subscriber connected");

    let send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if ws_tx.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(message)) = ws_rx.next().await {
        match message {
            Message::Text(text) => {
                let reply = hub.handle_message(text.as_str()).await;
                if tx.send(reply).is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    hub.unregister(subscriber_id);
    send_task.abort();
    debug!(%subscriber_id, "websocket subscriber disconnected");
}
