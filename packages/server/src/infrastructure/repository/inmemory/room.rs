//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! Rooms are never evicted; they live as long as the process.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use codecouncil_shared::time::Clock;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, ChatMessageDraft, FileName, RepositoryError, Room, RoomId, RoomRepository,
    Snapshot, SnapshotDraft, demo_room, is_demo_room,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<RoomId, Room>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
        }
    }

    async fn with_room<T>(
        &self,
        room_id: &RoomId,
        f: impl FnOnce(&mut Room) -> T + Send,
    ) -> Result<T, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))?;
        Ok(f(room))
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn ensure_room(&self, room_id: &RoomId) -> Room {
        let mut rooms = self.rooms.lock().await;
        rooms
            .entry(room_id.clone())
            .or_insert_with(|| {
                let created_at = self.clock.now_millis();
                if is_demo_room(room_id) {
                    tracing::info!("Room '{}' created with demo content", room_id);
                    demo_room(room_id.clone(), created_at)
                } else {
                    tracing::info!("Room '{}' created", room_id);
                    Room::new(room_id.clone(), created_at)
                }
            })
            .clone()
    }

    async fn get_room(&self, room_id: &RoomId) -> Option<Room> {
        let rooms = self.rooms.lock().await;
        rooms.get(room_id).cloned()
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        let mut list: Vec<Room> = rooms.values().cloned().collect();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        list
    }

    async fn post_message(
        &self,
        room_id: &RoomId,
        draft: ChatMessageDraft,
    ) -> Result<ChatMessage, RepositoryError> {
        self.with_room(room_id, |room| room.post_message(draft)).await
    }

    async fn put_file(
        &self,
        room_id: &RoomId,
        file_name: FileName,
        content: String,
    ) -> Result<(), RepositoryError> {
        self.with_room(room_id, |room| room.put_file(file_name, content))
            .await
    }

    async fn create_file(
        &self,
        room_id: &RoomId,
        file_name: FileName,
    ) -> Result<bool, RepositoryError> {
        self.with_room(room_id, |room| room.create_file(file_name))
            .await
    }

    async fn delete_file(
        &self,
        room_id: &RoomId,
        file_name: &FileName,
    ) -> Result<bool, RepositoryError> {
        self.with_room(room_id, |room| room.delete_file(file_name))
            .await
    }

    async fn save_snapshot(
        &self,
        room_id: &RoomId,
        draft: SnapshotDraft,
    ) -> Result<Snapshot, RepositoryError> {
        self.with_room(room_id, |room| room.save_snapshot(draft))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEMO_ROOM_ID;
    use codecouncil_shared::time::FixedClock;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - ensure_room による遅延作成とデモルームの初期データ投入
    // - 存在しないルームへの更新がエラーになること
    // - ID 採番が追記と同時に行われること
    // ========================================

    fn create_test_repository() -> InMemoryRoomRepository {
        InMemoryRoomRepository::new(Arc::new(FixedClock::new(1000)))
    }

    fn room_id(value: &str) -> RoomId {
        RoomId::new(value.to_string()).unwrap()
    }

    fn file(value: &str) -> FileName {
        FileName::new(value.to_string()).unwrap()
    }

    fn draft(content: &str) -> ChatMessageDraft {
        ChatMessageDraft {
            user_name: "alice".to_string(),
            avatar_color: "#10B981".to_string(),
            content: content.to_string(),
            timestamp: "10:00 AM".to_string(),
            kind: None,
        }
    }

    #[tokio::test]
    async fn test_ensure_room_creates_empty_room() {
        // テスト項目: 未知の ID の Room は空の状態で作成される
        // given (前提条件):
        let repo = create_test_repository();

        // when (操作):
        let room = repo.ensure_room(&room_id("BETA-1")).await;

        // then (期待する結果):
        assert!(room.messages.is_empty());
        assert!(room.files.is_empty());
        assert!(room.snapshots.is_empty());
        assert_eq!(room.created_at, 1000);
        assert!(repo.get_room(&room_id("BETA-1")).await.is_some());
    }

    #[tokio::test]
    async fn test_ensure_room_seeds_demo_room_only_once() {
        // テスト項目: デモルームは初回作成時のみ固定データで初期化される
        // given (前提条件):
        let repo = create_test_repository();
        let demo_id = room_id(DEMO_ROOM_ID);
        repo.ensure_room(&demo_id).await;
        repo.delete_file(&demo_id, &file("styles.css")).await.unwrap();

        // when (操作):
        let room = repo.ensure_room(&demo_id).await;

        // then (期待する結果): 変更後の状態が返り、フィクスチャは再投入されない
        assert_eq!(room.messages.len(), 3);
        assert_eq!(room.files.len(), 2);
        assert_eq!(room.snapshots.len(), 5);
    }

    #[tokio::test]
    async fn test_get_room_does_not_create() {
        // テスト項目: get_room は Room を作成しない
        // given (前提条件):
        let repo = create_test_repository();

        // when (操作):
        let room = repo.get_room(&room_id("GHOST")).await;

        // then (期待する結果):
        assert!(room.is_none());
        assert!(repo.list_rooms().await.is_empty());
    }

    #[tokio::test]
    async fn test_mutation_on_unknown_room_fails() {
        // テスト項目: 存在しない Room への更新は RoomNotFound になる
        // given (前提条件):
        let repo = create_test_repository();

        // when (操作):
        let result = repo.post_message(&room_id("GHOST"), draft("hi")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::RoomNotFound("GHOST".to_string()))
        );
    }

    #[tokio::test]
    async fn test_post_message_assigns_sequential_ids() {
        // テスト項目: メッセージ ID が追記ごとに 1 ずつ増える
        // given (前提条件):
        let repo = create_test_repository();
        let id = room_id("BETA-1");
        repo.ensure_room(&id).await;

        // when (操作):
        let first = repo.post_message(&id, draft("one")).await.unwrap();
        let second = repo.post_message(&id, draft("two")).await.unwrap();

        // then (期待する結果):
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.get_room(&id).await.unwrap().messages.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_posts_never_share_an_id() {
        // テスト項目: 並行して投稿しても ID が重複しない
        // given (前提条件):
        let repo = Arc::new(create_test_repository());
        let id = room_id("BETA-1");
        repo.ensure_room(&id).await;

        // when (操作):
        let mut handles = Vec::new();
        for n in 0..20 {
            let repo = repo.clone();
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                repo.post_message(&id, draft(&n.to_string())).await.unwrap().id
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        // then (期待する結果):
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_list_rooms_sorted_by_id() {
        // テスト項目: Room 一覧が ID 順に並ぶ
        // given (前提条件):
        let repo = create_test_repository();
        repo.ensure_room(&room_id("zeta")).await;
        repo.ensure_room(&room_id("alpha")).await;

        // when (操作):
        let rooms = repo.list_rooms().await;

        // then (期待する結果):
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }
}
