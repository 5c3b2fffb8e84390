//! UseCase: ファイル作成

use std::sync::Arc;

use crate::domain::{ClientRegistry, ConnectionId, FileName, RoomEvent, RoomId, RoomRepository};

use super::{broadcast::RoomBroadcaster, error::RoomActionError, membership::require_joined};

pub struct CreateFileUseCase {
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRegistry>,
    broadcaster: Arc<RoomBroadcaster>,
}

impl CreateFileUseCase {
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

    /// Create an empty file and announce it.
    ///
    /// An existing file keeps its content and nothing is broadcast; the
    /// result is then `Ok(false)`.
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        file_name: FileName,
    ) -> Result<bool, RoomActionError> {
        require_joined(self.clients.as_ref(), connection_id).await?;

        let created = self.rooms.create_file(&room_id, file_name.clone()).await?;
        if !created {
            tracing::debug!("File {} already exists in room {}", file_name, room_id);
            return Ok(false);
        }

        let event = RoomEvent::FileCreated { file_name };
        self.broadcaster.broadcast(&room_id, &event, None).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::{RelayFixture, drain};

    fn usecase(fixture: &RelayFixture) -> CreateFileUseCase {
        CreateFileUseCase::new(
            fixture.rooms.clone(),
            fixture.clients.clone(),
            fixture.broadcaster.clone(),
        )
    }

    #[tokio::test]
    async fn test_create_file() {
        // テスト項目: 新しいファイルは空の内容で作られ、全員に FILE_CREATED が届く
        // given (前提条件):
        let fixture = RelayFixture::new();
        let (x, mut x_rx) = fixture.joined("R1", "X").await;
        drain(&mut x_rx);
        let name = FileName::new("new.js".to_string()).unwrap();

        // when (操作):
        let created = usecase(&fixture)
            .execute(x, fixture.room_id("R1"), name.clone())
            .await
            .unwrap();

        // then (期待する結果):
        assert!(created);
        let room = fixture.rooms.get_room(&fixture.room_id("R1")).await.unwrap();
        assert_eq!(room.files.get(&name).map(String::as_str), Some(""));
        let frames = drain(&mut x_rx);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0]["type"], "FILE_CREATED");
        assert_eq!(frames[0]["fileName"], "new.js");
    }

    #[tokio::test]
    async fn test_create_existing_file_keeps_content() {
        // テスト項目: 既存ファイルの作成は内容を消さず、ブロードキャストもしない
        // given (前提条件):
        let fixture = RelayFixture::new();
        let (x, mut x_rx) = fixture.joined("ALPHA-4291", "X").await;
        drain(&mut x_rx);
        let name = FileName::new("styles.css".to_string()).unwrap();

        // when (操作):
        let created = usecase(&fixture)
            .execute(x, fixture.room_id("ALPHA-4291"), name.clone())
            .await
            .unwrap();

        // then (期待する結果):
        assert!(!created);
        let room = fixture
            .rooms
            .get_room(&fixture.room_id("ALPHA-4291"))
            .await
            .unwrap();
        assert!(!room.files[&name].is_empty());
        assert!(drain(&mut x_rx).is_empty());
    }
}
