//! UseCase: ファイル内容の更新
//!
//! Last write wins; every member, the editor included, receives the new
//! content so all editors converge on the same text.

use std::sync::Arc;

use crate::domain::{ClientRegistry, ConnectionId, FileName, RoomEvent, RoomId, RoomRepository};

use super::{broadcast::RoomBroadcaster, error::RoomActionError, membership::require_joined};

pub struct UpdateFileUseCase {
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRegistry>,
    broadcaster: Arc<RoomBroadcaster>,
}

impl UpdateFileUseCase {
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
        file_name: FileName,
        content: String,
    ) -> Result<(), RoomActionError> {
        require_joined(self.clients.as_ref(), connection_id).await?;

        self.rooms
            .put_file(&room_id, file_name.clone(), content.clone())
            .await?;

        let event = RoomEvent::FileUpdated { file_name, content };
        self.broadcaster.broadcast(&room_id, &event, None).await?;
        Ok(())
    }
}
