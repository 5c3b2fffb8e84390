//! Domain entities: rooms, chat messages, snapshots and client sessions.

use std::collections::BTreeMap;

use super::value_object::{FileName, RoomId};

/// A chat message stored in a room's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique within the room, assigned on append
    pub id: u64,
    pub user_name: String,
    pub avatar_color: String,
    pub content: String,
    /// Human-readable server-local time of receipt, e.g. `10:42 AM`
    pub timestamp: String,
    /// Optional tag such as `ai` for messages authored by the assistant
    pub kind: Option<String>,
}

/// A chat message before the room assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessageDraft {
    pub user_name: String,
    pub avatar_color: String,
    pub content: String,
    pub timestamp: String,
    pub kind: Option<String>,
}

/// A labeled point-in-time copy of one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub id: u64,
    pub label: String,
    pub file_name: FileName,
    pub content: String,
}

/// A snapshot before the room assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDraft {
    pub label: String,
    pub file_name: FileName,
    pub content: String,
}

/// A collaborative session: chat history, shared files and snapshot timeline.
///
/// Messages and snapshots are append-only. Their ids come from per-room
/// counters that advance in the same call as the append, so ids stay unique
/// and increasing as long as the room is mutated through `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub messages: Vec<ChatMessage>,
    pub files: BTreeMap<FileName, String>,
    pub snapshots: Vec<Snapshot>,
    /// Unix timestamp (milliseconds) when the room was created
    pub created_at: i64,
    last_message_id: u64,
    last_snapshot_id: u64,
}

impl Room {
    /// Create an empty room.
    pub fn new(id: RoomId, created_at: i64) -> Self {
        Self::with_content(id, created_at, Vec::new(), BTreeMap::new(), Vec::new())
    }

    /// Create a room pre-populated with history, e.g. from a fixture.
    pub fn with_content(
        id: RoomId,
        created_at: i64,
        messages: Vec<ChatMessage>,
        files: BTreeMap<FileName, String>,
        snapshots: Vec<Snapshot>,
    ) -> Self {
        let last_message_id = messages.iter().map(|m| m.id).max().unwrap_or(0);
        let last_snapshot_id = snapshots.iter().map(|s| s.id).max().unwrap_or(0);
        Self {
            id,
            messages,
            files,
            snapshots,
            created_at,
            last_message_id,
            last_snapshot_id,
        }
    }

    /// Append a chat message and return it with its assigned id.
    pub fn post_message(&mut self, draft: ChatMessageDraft) -> ChatMessage {
        self.last_message_id += 1;
        let message = ChatMessage {
            id: self.last_message_id,
            user_name: draft.user_name,
            avatar_color: draft.avatar_color,
            content: draft.content,
            timestamp: draft.timestamp,
            kind: draft.kind,
        };
        self.messages.push(message.clone());
        message
    }

    /// Set a file's content, creating the file if needed (last write wins).
    pub fn put_file(&mut self, file_name: FileName, content: String) {
        self.files.insert(file_name, content);
    }

    /// Create an empty file. Returns `false` and leaves the file untouched if
    /// it already exists.
    pub fn create_file(&mut self, file_name: FileName) -> bool {
        if self.files.contains_key(&file_name) {
            return false;
        }
        self.files.insert(file_name, String::new());
        true
    }

    /// Remove a file. Returns `false` if there was nothing to remove.
    pub fn delete_file(&mut self, file_name: &FileName) -> bool {
        self.files.remove(file_name).is_some()
    }

    /// Append a snapshot and return it with its assigned id.
    pub fn save_snapshot(&mut self, draft: SnapshotDraft) -> Snapshot {
        self.last_snapshot_id += 1;
        let snapshot = Snapshot {
            id: self.last_snapshot_id,
            label: draft.label,
            file_name: draft.file_name,
            content: draft.content,
        };
        self.snapshots.push(snapshot.clone());
        snapshot
    }
}

/// Who a joined connection represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSession {
    pub room_id: RoomId,
    pub user_name: String,
    pub avatar_color: String,
}

impl ClientSession {
    pub fn presence(&self) -> UserPresence {
        UserPresence {
            user_name: self.user_name.clone(),
            avatar_color: self.avatar_color.clone(),
        }
    }
}

/// Entry of a room's user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPresence {
    pub user_name: String,
    pub avatar_color: String,
}
