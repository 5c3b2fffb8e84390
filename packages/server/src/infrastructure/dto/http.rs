//! HTTP API DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::websocket::{MessageDto, SnapshotDto, UserDto};

/// Liveness probe body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub message: String,
}

/// Entry of `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    /// Names of the users currently joined
    pub users: Vec<String>,
    pub message_count: usize,
    pub file_count: usize,
    pub snapshot_count: usize,
    pub created_at: String,
}

/// Body of `GET /api/rooms/{room_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub id: String,
    pub messages: Vec<MessageDto>,
    pub files: BTreeMap<String, String>,
    pub snapshots: Vec<SnapshotDto>,
    pub users: Vec<UserDto>,
    pub created_at: String,
}

/// Chat line as sent by the front-end; missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatLineDto {
    pub author: String,
    pub content: String,
}

/// Body of `POST /api/ai/analyze`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzeRequestDto {
    pub messages: Vec<ChatLineDto>,
    pub current_code: String,
}

/// Body of `POST /api/ai/docs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsRequestDto {
    pub project_name: String,
    pub messages: Vec<ChatLineDto>,
    pub code: String,
}

impl Default for DocsRequestDto {
    fn default() -> Self {
        Self {
            project_name: "CodeCouncil".to_string(),
            messages: Vec::new(),
            code: String::new(),
        }
    }
}

/// Response of `POST /api/ai/docs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsResponseDto {
    pub markdown: String,
}
