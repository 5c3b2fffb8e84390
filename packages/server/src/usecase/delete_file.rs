//! UseCase: ファイル削除

use std::sync::Arc;

use crate::domain::{ClientRegistry, ConnectionId, FileName, RoomEvent, RoomId, RoomRepository};

use super::{broadcast::RoomBroadcaster, error::RoomActionError, membership::require_joined};

pub struct DeleteFileUseCase {
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRegistry>,
    broadcaster: Arc<RoomBroadcaster>,
}

impl DeleteFileUseCase {
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

    /// Remove a file and announce it. Snapshots of the file are kept.
    ///
    /// Returns `Ok(false)` without broadcasting when the file did not exist.
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        file_name: FileName,
    ) -> Result<bool, RoomActionError> {
        require_joined(self.clients.as_ref(), connection_id).await?;

        let deleted = self.rooms.delete_file(&room_id, &file_name).await?;
        if !deleted {
            tracing::debug!("File {} not found in room {}", file_name, room_id);
            return Ok(false);
        }

        let event = RoomEvent::FileDeleted { file_name };
        self.broadcaster.broadcast(&room_id, &event, None).await?;
        Ok(true)
    }
}
