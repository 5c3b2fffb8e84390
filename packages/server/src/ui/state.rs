//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{
    AnalyzeCodeUseCase, GenerateDocsUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
};

use super::dispatcher::RelayDispatcher;

/// Shared application state
pub struct AppState {
    /// Routes WebSocket frames to the relay use cases
    pub dispatcher: Arc<RelayDispatcher>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    pub analyze_code_usecase: Arc<AnalyzeCodeUseCase>,
    pub generate_docs_usecase: Arc<GenerateDocsUseCase>,
}
