//! UseCase 層
//!
//! Relay actions (join, chat, files, snapshots, disconnect), room inspection
//! for the HTTP API, and the AI assistant. Relay use cases assume the caller
//! serializes them; the dispatcher in the UI layer does.

mod analyze_code;
mod broadcast;
mod connect_client;
mod create_file;
mod delete_file;
mod disconnect_client;
mod error;
mod generate_docs;
mod get_room_detail;
mod get_rooms;
mod join_room;
mod membership;
mod prompt;
mod save_snapshot;
mod send_message;
mod update_file;

#[cfg(test)]
mod test_support;

pub use analyze_code::AnalyzeCodeUseCase;
pub use broadcast::RoomBroadcaster;
pub use connect_client::ConnectClientUseCase;
pub use create_file::CreateFileUseCase;
pub use delete_file::DeleteFileUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::{GetRoomDetailError, RoomActionError};
pub use generate_docs::GenerateDocsUseCase;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::{GetRoomsUseCase, RoomOverview};
pub use join_room::JoinRoomUseCase;
pub use save_snapshot::SaveSnapshotUseCase;
pub use send_message::{OutgoingMessage, SendMessageUseCase};
pub use update_file::UpdateFileUseCase;
