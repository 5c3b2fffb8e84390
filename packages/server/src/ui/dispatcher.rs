//! Envelope dispatcher
//!
//! Turns one inbound text frame into one relay use case call. A single turn
//! lock serializes every mutation together with its broadcast, so all
//! members of a room observe events in the same order.
//!
//! Each turn runs on its own task. Dropping the future returned by
//! [`RelayDispatcher::dispatch`] detaches the turn instead of cutting it
//! between the state change and the broadcast.

use std::sync::Arc;

use thiserror::Error;
use tokio::{sync::Mutex, task::JoinError};

use crate::{
    domain::{ConnectionId, FileName, PusherChannel, RoomId, SnapshotDraft, ValueObjectError},
    infrastructure::dto::websocket::{EnvelopeError, InboundEnvelope},
    usecase::{
        ConnectClientUseCase, CreateFileUseCase, DeleteFileUseCase, DisconnectClientUseCase,
        JoinRoomUseCase, OutgoingMessage, RoomActionError, SaveSnapshotUseCase,
        SendMessageUseCase, UpdateFileUseCase,
    },
};

/// Why a frame had no effect. Nothing is sent back to the client.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error("invalid field: {0}")]
    InvalidField(#[from] ValueObjectError),

    #[error(transparent)]
    Action(#[from] RoomActionError),

    #[error("turn task failed: {0}")]
    TurnFailed(#[from] JoinError),
}

/// The relay use cases the dispatcher routes to.
pub struct RelayUseCases {
    pub connect: ConnectClientUseCase,
    pub join_room: JoinRoomUseCase,
    pub send_message: SendMessageUseCase,
    pub update_file: UpdateFileUseCase,
    pub create_file: CreateFileUseCase,
    pub delete_file: DeleteFileUseCase,
    pub save_snapshot: SaveSnapshotUseCase,
    pub disconnect: DisconnectClientUseCase,
}

pub struct RelayDispatcher {
    turn: Mutex<()>,
    usecases: RelayUseCases,
}

impl RelayDispatcher {
    pub fn new(usecases: RelayUseCases) -> Self {
        Self {
            turn: Mutex::new(()),
            usecases,
        }
    }

    /// Accept a new connection whose outbound frames go to `sender`.
    pub async fn connect(&self, sender: PusherChannel) -> ConnectionId {
        self.usecases.connect.execute(sender).await
    }

    /// Handle one text frame received on `connection_id`.
    pub async fn dispatch(
        self: &Arc<Self>,
        connection_id: ConnectionId,
        text: &str,
    ) -> Result<(), DispatchError> {
        let envelope = InboundEnvelope::parse(text)?;
        tracing::debug!("{} from {}", envelope.kind(), connection_id);

        let this = Arc::clone(self);
        tokio::spawn(async move {
            let _turn = this.turn.lock().await;
            this.route(connection_id, envelope).await
        })
        .await?
    }

    /// Forget a closed connection and tell its room.
    pub async fn disconnect(&self, connection_id: ConnectionId) {
        let _turn = self.turn.lock().await;
        if let Err(e) = self.usecases.disconnect.execute(connection_id).await {
            tracing::warn!("Failed to announce departure of {}: {}", connection_id, e);
        }
    }

    async fn route(
        &self,
        connection_id: ConnectionId,
        envelope: InboundEnvelope,
    ) -> Result<(), DispatchError> {
        let usecases = &self.usecases;
        match envelope {
            InboundEnvelope::JoinRoom(payload) => {
                usecases
                    .join_room
                    .execute(
                        connection_id,
                        RoomId::new(payload.room_id)?,
                        payload.user_name,
                        payload.avatar_color,
                    )
                    .await?;
            }
            InboundEnvelope::SendMessage(payload) => {
                let message = OutgoingMessage {
                    room_id: RoomId::new(payload.room_id)?,
                    user_name: payload.user_name,
                    avatar_color: payload.avatar_color,
                    content: payload.content,
                };
                usecases.send_message.execute(connection_id, message).await?;
            }
            InboundEnvelope::UpdateFile(payload) => {
                usecases
                    .update_file
                    .execute(
                        connection_id,
                        RoomId::new(payload.room_id)?,
                        FileName::new(payload.file_name)?,
                        payload.content,
                    )
                    .await?;
            }
            InboundEnvelope::CreateFile(payload) => {
                usecases
                    .create_file
                    .execute(
                        connection_id,
                        RoomId::new(payload.room_id)?,
                        FileName::new(payload.file_name)?,
                    )
                    .await?;
            }
            InboundEnvelope::DeleteFile(payload) => {
                usecases
                    .delete_file
                    .execute(
                        connection_id,
                        RoomId::new(payload.room_id)?,
                        FileName::new(payload.file_name)?,
                    )
                    .await?;
            }
            InboundEnvelope::SaveSnapshot(payload) => {
                let draft = SnapshotDraft {
                    label: payload.label,
                    file_name: FileName::new(payload.file_name)?,
                    content: payload.content,
                };
                usecases
                    .save_snapshot
                    .execute(connection_id, RoomId::new(payload.room_id)?, draft)
                    .await?;
            }
        }
        Ok(())
    }
}
