//! UseCase: 接続の受け入れ
//!
//! Allocates a connection id and attaches the outbound channel. The
//! connection belongs to no room until it sends JOIN_ROOM.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionIdFactory, MessagePusher, PusherChannel};

pub struct ConnectClientUseCase {
    id_factory: Arc<ConnectionIdFactory>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    pub fn new(id_factory: Arc<ConnectionIdFactory>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            id_factory,
            message_pusher,
        }
    }

    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = self.id_factory.generate();
        self.message_pusher
            .register_connection(connection_id, sender)
            .await;
        tracing::debug!("Connection {} accepted", connection_id);
        connection_id
    }
}
