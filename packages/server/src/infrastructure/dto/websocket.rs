//! WebSocket envelope DTOs.
//!
//! Every frame is a JSON object with a string `type` tag; the remaining
//! fields depend on the kind and use camelCase names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ========================================
// Inbound (client → server)
// ========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomPayload {
    pub room_id: String,
    pub user_name: String,
    pub avatar_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessagePayload {
    pub room_id: String,
    /// Falls back to the name given at join time when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilePayload {
    pub room_id: String,
    pub file_name: String,
    pub content: String,
}

/// Payload of `CREATE_FILE` and `DELETE_FILE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRefPayload {
    pub room_id: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSnapshotPayload {
    pub room_id: String,
    pub file_name: String,
    pub content: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InboundEnvelope {
    JoinRoom(JoinRoomPayload),
    SendMessage(SendMessagePayload),
    UpdateFile(UpdateFilePayload),
    CreateFile(FileRefPayload),
    DeleteFile(FileRefPayload),
    SaveSnapshot(SaveSnapshotPayload),
}

/// Tags accepted from clients.
pub const INBOUND_KINDS: [&str; 6] = [
    "JOIN_ROOM",
    "SEND_MESSAGE",
    "UPDATE_FILE",
    "CREATE_FILE",
    "DELETE_FILE",
    "SAVE_SNAPSHOT",
];

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("envelope is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("envelope has no string `type` field")]
    MissingType,

    #[error("unknown envelope type '{0}'")]
    UnknownKind(String),

    #[error("malformed {kind} envelope: {source}")]
    Malformed {
        kind: String,
        source: serde_json::Error,
    },
}

impl InboundEnvelope {
    /// Parse one text frame.
    ///
    /// Unknown kinds are reported separately from malformed known kinds so the
    /// caller can log them differently.
    pub fn parse(text: &str) -> Result<Self, EnvelopeError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(EnvelopeError::InvalidJson)?;

        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(EnvelopeError::MissingType)?
            .to_string();

        if !INBOUND_KINDS.contains(&kind.as_str()) {
            return Err(EnvelopeError::UnknownKind(kind));
        }

        serde_json::from_value(value).map_err(|source| EnvelopeError::Malformed { kind, source })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InboundEnvelope::JoinRoom(_) => "JOIN_ROOM",
            InboundEnvelope::SendMessage(_) => "SEND_MESSAGE",
            InboundEnvelope::UpdateFile(_) => "UPDATE_FILE",
            InboundEnvelope::CreateFile(_) => "CREATE_FILE",
            InboundEnvelope::DeleteFile(_) => "DELETE_FILE",
            InboundEnvelope::SaveSnapshot(_) => "SAVE_SNAPSHOT",
        }
    }
}

// ========================================
// Outbound (server → client)
// ========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_name: String,
    pub avatar_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: u64,
    pub user_name: String,
    pub avatar_color: String,
    pub content: String,
    pub timestamp: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDto {
    pub id: u64,
    pub label: String,
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum OutboundEvent {
    RoomState {
        messages: Vec<MessageDto>,
        files: BTreeMap<String, String>,
        snapshots: Vec<SnapshotDto>,
        users: Vec<UserDto>,
    },
    UserJoined {
        user_name: String,
        users: Vec<UserDto>,
    },
    UserLeft {
        user_name: String,
        users: Vec<UserDto>,
    },
    NewMessage {
        message: MessageDto,
    },
    FileUpdated {
        file_name: String,
        content: String,
    },
    FileCreated {
        file_name: String,
    },
    FileDeleted {
        file_name: String,
    },
    SnapshotSaved {
        snapshot: SnapshotDto,
    },
}
