//! Conversion logic between DTOs and domain entities.

use crate::domain::{ChatLine, ChatMessage, RoomEvent, Snapshot, UserPresence};
use crate::infrastructure::dto::{
    http::ChatLineDto,
    websocket::{MessageDto, OutboundEvent, SnapshotDto, UserDto},
};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&ChatMessage> for MessageDto {
    fn from(model: &ChatMessage) -> Self {
        Self {
            id: model.id,
            user_name: model.user_name.clone(),
            avatar_color: model.avatar_color.clone(),
            content: model.content.clone(),
            timestamp: model.timestamp.clone(),
            kind: model.kind.clone(),
        }
    }
}

impl From<&Snapshot> for SnapshotDto {
    fn from(model: &Snapshot) -> Self {
        Self {
            id: model.id,
            label: model.label.clone(),
            file_name: model.file_name.as_str().to_string(),
            content: model.content.clone(),
        }
    }
}

impl From<&UserPresence> for UserDto {
    fn from(model: &UserPresence) -> Self {
        Self {
            user_name: model.user_name.clone(),
            avatar_color: model.avatar_color.clone(),
        }
    }
}

pub fn users_to_dto(users: &[UserPresence]) -> Vec<UserDto> {
    users.iter().map(UserDto::from).collect()
}

impl From<&RoomEvent> for OutboundEvent {
    fn from(event: &RoomEvent) -> Self {
        match event {
            RoomEvent::RoomState { room, users } => OutboundEvent::RoomState {
                messages: room.messages.iter().map(MessageDto::from).collect(),
                files: room
                    .files
                    .iter()
                    .map(|(name, content)| (name.as_str().to_string(), content.clone()))
                    .collect(),
                snapshots: room.snapshots.iter().map(SnapshotDto::from).collect(),
                users: users_to_dto(users),
            },
            RoomEvent::UserJoined { user_name, users } => OutboundEvent::UserJoined {
                user_name: user_name.clone(),
                users: users_to_dto(users),
            },
            RoomEvent::UserLeft { user_name, users } => OutboundEvent::UserLeft {
                user_name: user_name.clone(),
                users: users_to_dto(users),
            },
            RoomEvent::NewMessage(message) => OutboundEvent::NewMessage {
                message: message.into(),
            },
            RoomEvent::FileUpdated { file_name, content } => OutboundEvent::FileUpdated {
                file_name: file_name.as_str().to_string(),
                content: content.clone(),
            },
            RoomEvent::FileCreated { file_name } => OutboundEvent::FileCreated {
                file_name: file_name.as_str().to_string(),
            },
            RoomEvent::FileDeleted { file_name } => OutboundEvent::FileDeleted {
                file_name: file_name.as_str().to_string(),
            },
            RoomEvent::SnapshotSaved(snapshot) => OutboundEvent::SnapshotSaved {
                snapshot: snapshot.into(),
            },
        }
    }
}

// ========================================
// DTO → Domain Entity
// ========================================

impl From<ChatLineDto> for ChatLine {
    fn from(dto: ChatLineDto) -> Self {
        Self {
            author: dto.author,
            content: dto.content,
        }
    }
}
