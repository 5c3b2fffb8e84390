//! UseCase: Room 詳細の取得
//!
//! Read-only: an unknown id is reported, never created.

use std::sync::Arc;

use crate::domain::{ClientRegistry, RoomId, RoomRepository};

use super::{error::GetRoomDetailError, get_rooms::RoomOverview};

pub struct GetRoomDetailUseCase {
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRegistry>,
}

impl GetRoomDetailUseCase {
    pub fn new(rooms: Arc<dyn RoomRepository>, clients: Arc<dyn ClientRegistry>) -> Self {
        Self { rooms, clients }
    }

    pub async fn execute(&self, room_id: String) -> Result<RoomOverview, GetRoomDetailError> {
        let room_id = RoomId::new(room_id).map_err(|_| GetRoomDetailError::RoomNotFound)?;
        let room = self
            .rooms
            .get_room(&room_id)
            .await
            .ok_or(GetRoomDetailError::RoomNotFound)?;
        let users = self.clients.list_users(&room_id).await;
        Ok(RoomOverview { room, users })
    }
}
