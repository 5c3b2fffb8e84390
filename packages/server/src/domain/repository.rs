//! Repository trait definitions
//!
//! The interfaces the use cases need for room and session state. Concrete
//! implementations live in the infrastructure layer, so the domain does not
//! depend on how the state is stored.

use async_trait::async_trait;

use super::{
    ChatMessage, ChatMessageDraft, ClientSession, ConnectionId, FileName, RepositoryError, Room,
    RoomId, Snapshot, SnapshotDraft, UserPresence,
};

/// Room Registry: room id to room state.
///
/// Every mutation that assigns an id does so in the same critical section as
/// the append.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Return the room, creating it first if the id is unseen.
    async fn ensure_room(&self, room_id: &RoomId) -> Room;

    async fn get_room(&self, room_id: &RoomId) -> Option<Room>;

    /// All rooms, sorted by id.
    async fn list_rooms(&self) -> Vec<Room>;

    async fn post_message(
        &self,
        room_id: &RoomId,
        draft: ChatMessageDraft,
    ) -> Result<ChatMessage, RepositoryError>;

    async fn put_file(
        &self,
        room_id: &RoomId,
        file_name: FileName,
        content: String,
    ) -> Result<(), RepositoryError>;

    /// Returns `Ok(false)` when the file already existed.
    async fn create_file(&self, room_id: &RoomId, file_name: FileName)
    -> Result<bool, RepositoryError>;

    /// Returns `Ok(false)` when there was no such file.
    async fn delete_file(
        &self,
        room_id: &RoomId,
        file_name: &FileName,
    ) -> Result<bool, RepositoryError>;

    async fn save_snapshot(
        &self,
        room_id: &RoomId,
        draft: SnapshotDraft,
    ) -> Result<Snapshot, RepositoryError>;
}

/// Client Registry: live connection to the room/user it represents.
#[async_trait]
pub trait ClientRegistry: Send + Sync {
    /// Insert or overwrite the session of a connection, returning the previous one.
    async fn register(
        &self,
        connection_id: ConnectionId,
        session: ClientSession,
    ) -> Option<ClientSession>;

    /// Remove the session of a connection, returning it if there was one.
    async fn unregister(&self, connection_id: &ConnectionId) -> Option<ClientSession>;

    async fn session(&self, connection_id: &ConnectionId) -> Option<ClientSession>;

    /// Users joined to a room, in connection order.
    async fn list_users(&self, room_id: &RoomId) -> Vec<UserPresence>;

    /// Connections joined to a room, in connection order.
    async fn connections_in(&self, room_id: &RoomId) -> Vec<ConnectionId>;
}
