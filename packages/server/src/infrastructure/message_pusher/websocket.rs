//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を `ConnectionId` で管理
//! - `RoomEvent` を JSON に変換して送信（push_to, broadcast）
//!
//! The socket itself is owned by the UI layer (`ui::handler::websocket`),
//! which drains the receiving half of each channel into the socket.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, RoomEvent},
    infrastructure::dto::websocket::OutboundEvent,
};

/// Serialize an event into its wire form.
pub fn encode_event(event: &RoomEvent) -> Result<String, MessagePushError> {
    serde_json::to_string(&OutboundEvent::from(event))
        .map_err(|e| MessagePushError::EncodeFailed(e.to_string()))
}

#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// Key: connection id, Value: outbound channel of that connection
    connections: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_connection(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut connections = self.connections.lock().await;
        connections.insert(connection_id, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    async fn unregister_connection(&self, connection_id: &ConnectionId) {
        let mut connections = self.connections.lock().await;
        connections.remove(connection_id);
        tracing::debug!(
            "Connection '{}' unregistered from MessagePusher",
            connection_id
        );
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &RoomEvent,
    ) -> Result<(), MessagePushError> {
        let content = encode_event(event)?;
        let connections = self.connections.lock().await;

        let sender = connections
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ConnectionNotFound(connection_id.to_string()))?;
        sender
            .send(content)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed {} to '{}'", event.kind(), connection_id);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: &[ConnectionId],
        event: &RoomEvent,
    ) -> Result<usize, MessagePushError> {
        let content = encode_event(event)?;
        let connections = self.connections.lock().await;
        let mut delivered = 0;

        for target in targets {
            let Some(sender) = connections.get(target) else {
                tracing::warn!("Connection '{}' not found during broadcast, skipping", target);
                continue;
            };
            if sender.is_closed() {
                tracing::debug!("Connection '{}' is closing, skipping", target);
                continue;
            }
            // ブロードキャストでは一部の送信失敗を許容
            match sender.send(content.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => tracing::warn!("Failed to push {} to '{}': {}", event.kind(), target, e),
            }
        }

        tracing::debug!(
            "Broadcasted {} to {}/{} connections",
            event.kind(),
            delivered,
            targets.len()
        );
        Ok(delivered)
    }
}
