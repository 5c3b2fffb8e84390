//! Events fanned out to the connections of a room.

use super::{
    entity::{ChatMessage, Room, Snapshot, UserPresence},
    value_object::FileName,
};

/// Something that happened in a room and must reach its connections.
///
/// The wire encoding lives in the infrastructure layer; use cases only decide
/// which event goes to which connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// Full state, sent only to the connection that just joined
    RoomState {
        room: Room,
        users: Vec<UserPresence>,
    },
    UserJoined {
        user_name: String,
        users: Vec<UserPresence>,
    },
    UserLeft {
        user_name: String,
        users: Vec<UserPresence>,
    },
    NewMessage(ChatMessage),
    FileUpdated {
        file_name: FileName,
        content: String,
    },
    FileCreated {
        file_name: FileName,
    },
    FileDeleted {
        file_name: FileName,
    },
    SnapshotSaved(Snapshot),
}

impl RoomEvent {
    /// Wire tag of the event, handy for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            RoomEvent::RoomState { .. } => "ROOM_STATE",
            RoomEvent::UserJoined { .. } => "USER_JOINED",
            RoomEvent::UserLeft { .. } => "USER_LEFT",
            RoomEvent::NewMessage(_) => "NEW_MESSAGE",
            RoomEvent::FileUpdated { .. } => "FILE_UPDATED",
            RoomEvent::FileCreated { .. } => "FILE_CREATED",
            RoomEvent::FileDeleted { .. } => "FILE_DELETED",
            RoomEvent::SnapshotSaved(_) => "SNAPSHOT_SAVED",
        }
    }
}
