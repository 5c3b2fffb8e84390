//! MessagePusher trait definition
//!
//! Abstraction over delivering room events to live connections.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, RoomEvent};

/// Outbound channel of one connection; the transport task drains it.
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Attach the outbound channel of a newly accepted connection.
    async fn register_connection(&self, connection_id: ConnectionId, sender: PusherChannel);

    async fn unregister_connection(&self, connection_id: &ConnectionId);

    /// Send one event to one connection.
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &RoomEvent,
    ) -> Result<(), MessagePushError>;

    /// Send one event to every target that is still open.
    ///
    /// A failure for one recipient never stops delivery to the others.
    /// Returns the number of connections the event was handed to.
    async fn broadcast(
        &self,
        targets: &[ConnectionId],
        event: &RoomEvent,
    ) -> Result<usize, MessagePushError>;
}
