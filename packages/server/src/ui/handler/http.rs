//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use codecouncil_shared::time::timestamp_to_rfc3339;

use crate::{
    domain::{ChatLine, CodeAnalysis},
    infrastructure::dto::{
        conversion::users_to_dto,
        http::{
            AnalyzeRequestDto, DocsRequestDto, DocsResponseDto, HealthDto, RoomDetailDto,
            RoomSummaryDto,
        },
        websocket::{MessageDto, SnapshotDto},
    },
    ui::state::AppState,
    usecase::{GetRoomDetailError, RoomOverview},
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        message: "CodeCouncil WebSocket server is running".to_string(),
    })
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let overviews = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    let summaries = overviews
        .into_iter()
        .map(|RoomOverview { room, users }| RoomSummaryDto {
            id: room.id.as_str().to_string(),
            users: users.into_iter().map(|user| user.user_name).collect(),
            message_count: room.messages.len(),
            file_count: room.files.len(),
            snapshot_count: room.snapshots.len(),
            created_at: timestamp_to_rfc3339(room.created_at),
        })
        .collect();

    Json(summaries)
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    match state.get_room_detail_usecase.execute(room_id).await {
        Ok(RoomOverview { room, users }) => {
            // Domain Model から DTO への変換
            let detail = RoomDetailDto {
                id: room.id.as_str().to_string(),
                messages: room.messages.iter().map(MessageDto::from).collect(),
                files: room
                    .files
                    .iter()
                    .map(|(name, content)| (name.as_str().to_string(), content.clone()))
                    .collect(),
                snapshots: room.snapshots.iter().map(SnapshotDto::from).collect(),
                users: users_to_dto(&users),
                created_at: timestamp_to_rfc3339(room.created_at),
            };
            Ok(Json(detail))
        }
        Err(GetRoomDetailError::RoomNotFound) => Err(StatusCode::NOT_FOUND),
    }
}

/// Read a JSON body leniently: anything unparsable counts as an empty request.
fn lenient_body<T: serde::de::DeserializeOwned + Default>(body: &Bytes, route: &str) -> T {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::warn!("[{}] unreadable request body ({}), using defaults", route, e);
        T::default()
    })
}

/// Code analysis; always answers 200, with the fallback on any failure.
pub async fn analyze_code(State(state): State<Arc<AppState>>, body: Bytes) -> Json<CodeAnalysis> {
    let request: AnalyzeRequestDto = lenient_body(&body, "analyze");
    let messages: Vec<ChatLine> = request.messages.into_iter().map(ChatLine::from).collect();

    let analysis = state
        .analyze_code_usecase
        .execute(messages, request.current_code)
        .await;
    Json(analysis)
}

/// README generation; always answers 200, with the fallback on any failure.
pub async fn generate_docs(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Json<DocsResponseDto> {
    let request: DocsRequestDto = lenient_body(&body, "docs");
    let messages: Vec<ChatLine> = request.messages.into_iter().map(ChatLine::from).collect();

    let markdown = state
        .generate_docs_usecase
        .execute(request.project_name, messages, request.code)
        .await;
    Json(DocsResponseDto { markdown })
}
