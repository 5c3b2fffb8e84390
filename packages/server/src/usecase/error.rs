//! UseCase layer errors.

use thiserror::Error;

use crate::domain::{ConnectionId, MessagePushError, RepositoryError};

/// Why a room mutation was not applied.
///
/// None of these reach the client; the dispatcher logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomActionError {
    #[error("connection '{0}' has not joined a room")]
    NotJoined(ConnectionId),

    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("broadcast failed: {0}")]
    BroadcastFailed(String),
}

impl From<RepositoryError> for RoomActionError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::RoomNotFound(room_id) => RoomActionError::RoomNotFound(room_id),
        }
    }
}

impl From<MessagePushError> for RoomActionError {
    fn from(error: MessagePushError) -> Self {
        RoomActionError::BroadcastFailed(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("room not found")]
    RoomNotFound,
}
