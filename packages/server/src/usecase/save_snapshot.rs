//! UseCase: スナップショット保存
//!
//! Snapshots are append-only; the room's file content is not touched.

use std::sync::Arc;

use crate::domain::{
    ClientRegistry, ConnectionId, RoomEvent, RoomId, RoomRepository, Snapshot, SnapshotDraft,
};

use super::{broadcast::RoomBroadcaster, error::RoomActionError, membership::require_joined};

pub struct SaveSnapshotUseCase {
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRegistry>,
    broadcaster: Arc<RoomBroadcaster>,
}

impl SaveSnapshotUseCase {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        clients: Arc<dyn ClientRegistry>,
        broadcaster: Arc<RoomBroadcaster>,
    ) -> Self {
        Self {
            rooms,
            clients,
            broadcaster,
        }
    }

    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        draft: SnapshotDraft,
    ) -> Result<Snapshot, RoomActionError> {
        require_joined(self.clients.as_ref(), connection_id).await?;

        let snapshot = self.rooms.save_snapshot(&room_id, draft).await?;
        self.broadcaster
            .broadcast(&room_id, &RoomEvent::SnapshotSaved(snapshot.clone()), None)
            .await?;

        tracing::info!(
            "Snapshot {} ({}) saved in room {}",
            snapshot.id,
            snapshot.label,
            room_id
        );
        Ok(snapshot)
    }
}
