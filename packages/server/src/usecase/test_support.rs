//! Shared wiring for use case tests: real in-memory stores and pusher with
//! one channel per simulated connection.

use std::sync::Arc;

use codecouncil_shared::time::FixedClock;
use tokio::sync::mpsc;

use crate::{
    domain::{ClientRegistry, ConnectionId, ConnectionIdFactory, RoomId, RoomRepository},
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryClientRegistry, InMemoryRoomRepository},
    },
};

use super::{
    broadcast::RoomBroadcaster, connect_client::ConnectClientUseCase, join_room::JoinRoomUseCase,
};

/// 2023-01-01 00:00:00 UTC
pub const TEST_NOW: i64 = 1672531200000;

pub struct RelayFixture {
    pub rooms: Arc<InMemoryRoomRepository>,
    pub clients: Arc<InMemoryClientRegistry>,
    pub pusher: Arc<WebSocketMessagePusher>,
    pub broadcaster: Arc<RoomBroadcaster>,
    pub clock: Arc<FixedClock>,
    connect: ConnectClientUseCase,
    join: JoinRoomUseCase,
}

impl RelayFixture {
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::new(TEST_NOW));
        let rooms = Arc::new(InMemoryRoomRepository::new(clock.clone()));
        let clients = Arc::new(InMemoryClientRegistry::new());
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let broadcaster = Arc::new(RoomBroadcaster::new(clients.clone(), pusher.clone()));
        let connect = ConnectClientUseCase::new(Arc::new(ConnectionIdFactory::new()), pusher.clone());
        let join = JoinRoomUseCase::new(rooms.clone(), clients.clone(), broadcaster.clone());

        Self {
            rooms,
            clients,
            pusher,
            broadcaster,
            clock,
            connect,
            join,
        }
    }

    pub fn room_id(&self, value: &str) -> RoomId {
        RoomId::new(value.to_string()).unwrap()
    }

    /// Accept a connection without joining a room.
    pub async fn connected(&self) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let connection_id = self.connect.execute(tx).await;
        (connection_id, rx)
    }

    /// Accept a connection and join it to `room`.
    pub async fn joined(
        &self,
        room: &str,
        user_name: &str,
    ) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let (connection_id, rx) = self.connected().await;
        self.join
            .execute(
                connection_id,
                self.room_id(room),
                user_name.to_string(),
                "#3B82F6".to_string(),
            )
            .await
            .unwrap();
        (connection_id, rx)
    }

    /// Send another JOIN_ROOM on an already accepted connection.
    pub async fn join_again(&self, connection_id: ConnectionId, room: &str, user_name: &str) {
        self.join
            .execute(
                connection_id,
                self.room_id(room),
                user_name.to_string(),
                "#10B981".to_string(),
            )
            .await
            .unwrap();
    }

    pub async fn message_count(&self, room: &str) -> usize {
        self.rooms
            .get_room(&self.room_id(room))
            .await
            .map(|room| room.messages.len())
            .unwrap_or(0)
    }

    pub async fn user_names(&self, room: &str) -> Vec<String> {
        self.clients
            .list_users(&self.room_id(room))
            .await
            .into_iter()
            .map(|user| user.user_name)
            .collect()
    }
}

/// Everything queued on a connection so far, decoded as JSON.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<serde_json::Value> {
    let mut frames = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        frames.push(serde_json::from_str(&frame).unwrap());
    }
    frames
}
