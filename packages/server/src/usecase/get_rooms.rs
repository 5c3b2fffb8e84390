//! UseCase: Room 一覧の取得

use std::sync::Arc;

use crate::domain::{ClientRegistry, Room, RoomRepository, UserPresence};

/// A room together with who is currently in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOverview {
    pub room: Room,
    pub users: Vec<UserPresence>,
}

pub struct GetRoomsUseCase {
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRegistry>,
}

impl GetRoomsUseCase {
    pub fn new(rooms: Arc<dyn RoomRepository>, clients: Arc<dyn ClientRegistry>) -> Self {
        Self { rooms, clients }
    }

    /// Every room, sorted by id.
    pub async fn execute(&self) -> Vec<RoomOverview> {
        let mut overviews = Vec::new();
        for room in self.rooms.list_rooms().await {
            let users = self.clients.list_users(&room.id).await;
            overviews.push(RoomOverview { room, users });
        }
        overviews
    }
}
