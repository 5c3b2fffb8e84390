//! UseCase: 切断処理
//!
//! ## テスト作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute()
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済みの接続が切れると残りのメンバーに USER_LEFT が届く
//! - エッジケース：JOIN_ROOM 前の切断では何も送られない
//! - エッジケース：最後の一人が抜けても Room は残る

use std::sync::Arc;

use crate::domain::{ClientRegistry, ClientSession, ConnectionId, MessagePusher, RoomEvent};

use super::{broadcast::RoomBroadcaster, error::RoomActionError};

pub struct DisconnectClientUseCase {
    clients: Arc<dyn ClientRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
    broadcaster: Arc<RoomBroadcaster>,
}

impl DisconnectClientUseCase {
    pub fn new(
        clients: Arc<dyn ClientRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        broadcaster: Arc<RoomBroadcaster>,
    ) -> Self {
        Self {
            clients,
            message_pusher,
            broadcaster,
        }
    }

    /// Forget the connection and tell its room, if it had joined one.
    ///
    /// Returns the session the connection held.
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
    ) -> Result<Option<ClientSession>, RoomActionError> {
        self.message_pusher
            .unregister_connection(&connection_id)
            .await;

        let Some(session) = self.clients.unregister(&connection_id).await else {
            tracing::debug!("Connection {} closed before joining", connection_id);
            return Ok(None);
        };

        let users = self.clients.list_users(&session.room_id).await;
        let event = RoomEvent::UserLeft {
            user_name: session.user_name.clone(),
            users,
        };
        self.broadcaster
            .broadcast(&session.room_id, &event, None)
            .await?;

        tracing::info!(
            "{} left room {} ({})",
            session.user_name,
            session.room_id,
            connection_id
        );
        Ok(Some(session))
    }
}
