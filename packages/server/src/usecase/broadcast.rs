//! Broadcast engine: fan one event out to the connections of a room.

use std::sync::Arc;

use crate::domain::{
    ClientRegistry, ConnectionId, MessagePushError, MessagePusher, RoomEvent, RoomId,
};

pub struct RoomBroadcaster {
    clients: Arc<dyn ClientRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RoomBroadcaster {
    pub fn new(clients: Arc<dyn ClientRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            clients,
            message_pusher,
        }
    }

    /// Deliver `event` to every connection joined to `room_id`, except `exclude`.
    ///
    /// Returns the number of connections the event was handed to.
    pub async fn broadcast(
        &self,
        room_id: &RoomId,
        event: &RoomEvent,
        exclude: Option<ConnectionId>,
    ) -> Result<usize, MessagePushError> {
        let targets: Vec<ConnectionId> = self
            .clients
            .connections_in(room_id)
            .await
            .into_iter()
            .filter(|connection_id| Some(*connection_id) != exclude)
            .collect();

        self.message_pusher.broadcast(&targets, event).await
    }

    /// Send `event` to one connection only.
    pub async fn send_to(
        &self,
        connection_id: &ConnectionId,
        event: &RoomEvent,
    ) -> Result<(), MessagePushError> {
        self.message_pusher.push_to(connection_id, event).await
    }
}
