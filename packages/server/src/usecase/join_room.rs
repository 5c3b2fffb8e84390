//! UseCase: Room への参加
//!
//! ## テスト作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute()
//! - 参加者への ROOM_STATE、既存メンバーへの USER_JOINED
//!
//! ### なぜこのテストが必要か
//! - 参加者本人は完全な状態を一度だけ受け取り、他のメンバーには通知だけが届くことを保証
//! - デモ Room は初回参加時にシードされることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規 Room・デモ Room への参加
//! - 正常系：二人目の参加で一人目に USER_JOINED が届く
//! - エッジケース：同じ接続で別の Room に参加し直す

use std::sync::Arc;

use crate::domain::{
    ClientRegistry, ClientSession, ConnectionId, RoomEvent, RoomId, RoomRepository,
};

use super::{broadcast::RoomBroadcaster, error::RoomActionError};

pub struct JoinRoomUseCase {
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRegistry>,
    broadcaster: Arc<RoomBroadcaster>,
}

impl JoinRoomUseCase {
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

    /// Join `connection_id` to `room_id`, creating the room if needed.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - number of users in the room after joining
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        user_name: String,
        avatar_color: String,
    ) -> Result<usize, RoomActionError> {
        let room = self.rooms.ensure_room(&room_id).await;

        let session = ClientSession {
            room_id: room_id.clone(),
            user_name: user_name.clone(),
            avatar_color,
        };
        let previous = self.clients.register(connection_id, session).await;

        if let Some(previous) = previous.filter(|previous| previous.room_id != room_id) {
            let users = self.clients.list_users(&previous.room_id).await;
            let event = RoomEvent::UserLeft {
                user_name: previous.user_name,
                users,
            };
            self.broadcaster
                .broadcast(&previous.room_id, &event, None)
                .await?;
        }

        let users = self.clients.list_users(&room_id).await;
        let user_count = users.len();

        let state = RoomEvent::RoomState {
            room,
            users: users.clone(),
        };
        if let Err(e) = self.broadcaster.send_to(&connection_id, &state).await {
            tracing::warn!("Failed to send room state to {}: {}", connection_id, e);
        }

        let joined = RoomEvent::UserJoined {
            user_name: user_name.clone(),
            users,
        };
        self.broadcaster
            .broadcast(&room_id, &joined, Some(connection_id))
            .await?;

        tracing::info!(
            "{} joined room {} ({}, {} online)",
            user_name,
            room_id,
            connection_id,
            user_count
        );
        Ok(user_count)
    }
}
