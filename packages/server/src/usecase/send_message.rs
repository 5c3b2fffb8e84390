//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージ ID の採番と Room 全体へのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 送信者自身も含めて NEW_MESSAGE をちょうど一度だけ受け取ることを保証
//! - 未参加の接続や存在しない Room 宛てのメッセージが履歴に残らないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：二人の Room でのメッセージ送信
//! - 正常系：userName / avatarColor 省略時は参加時の値を使う
//! - 正常系：参加中とは別の既存 Room 宛ての送信
//! - 異常系：JOIN_ROOM 前の送信、存在しない Room 宛ての送信

use std::sync::Arc;

use codecouncil_shared::time::{Clock, format_clock_time};

use crate::domain::{
    ChatMessage, ChatMessageDraft, ClientRegistry, ConnectionId, RoomEvent, RoomId,
    RoomRepository,
};

use super::{broadcast::RoomBroadcaster, error::RoomActionError, membership::require_joined};

/// Chat message posted by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub room_id: RoomId,
    pub user_name: Option<String>,
    pub avatar_color: Option<String>,
    pub content: String,
}

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRegistry>,
    broadcaster: Arc<RoomBroadcaster>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        clients: Arc<dyn ClientRegistry>,
        broadcaster: Arc<RoomBroadcaster>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            rooms,
            clients,
            broadcaster,
            clock,
        }
    }

    /// Append the message to the room history and deliver it to every
    /// member, the sender included.
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        message: OutgoingMessage,
    ) -> Result<ChatMessage, RoomActionError> {
        let session = require_joined(self.clients.as_ref(), connection_id).await?;

        let draft = ChatMessageDraft {
            user_name: message.user_name.unwrap_or(session.user_name),
            avatar_color: message.avatar_color.unwrap_or(session.avatar_color),
            content: message.content,
            timestamp: format_clock_time(self.clock.now_millis()),
            kind: None,
        };
        let posted = self.rooms.post_message(&message.room_id, draft).await?;

        self.broadcaster
            .broadcast(&message.room_id, &RoomEvent::NewMessage(posted.clone()), None)
            .await?;

        tracing::debug!(
            "Message {} posted to room {} by {}",
            posted.id,
            message.room_id,
            posted.user_name
        );
        Ok(posted)
    }
}
