//! Thread handlers for the board API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::board::BoardService;
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, Payload, PublicThreadResponse, ReportThreadRequest,
    ThreadResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::{AppState, REPORTED};
use crate::BoardError;

/// POST /api/threads/:board - Start a thread.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Payload(req): Payload<CreateThreadRequest>,
) -> Result<Json<ThreadResponse>, ApiError> {
    let service = BoardService::new(&state.db);
    let thread = service
        .create_thread(&board, &req.text, &req.delete_password)
        .await?;
    Ok(Json(ThreadResponse::from(thread)))
}

/// GET /api/threads/:board - List the most recently bumped threads.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<PublicThreadResponse>>, ApiError> {
    let service = BoardService::new(&state.db);
    let threads = service.list_recent(&board).await?;
    Ok(Json(
        threads.into_iter().map(PublicThreadResponse::from).collect(),
    ))
}

/// DELETE /api/threads/:board - Delete a thread with its password.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Payload(req): Payload<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(&state.db);
    let outcome = service
        .delete_thread(&board, &req.thread_id, &req.delete_password)
        .await?;
    Ok(outcome.as_str())
}

/// PUT /api/threads/:board - Report a thread.
///
/// Answers "reported" even when the thread does not exist.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Payload(req): Payload<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(&state.db);
    match service.report_thread(&board, &req.thread_id).await {
        Ok(()) | Err(BoardError::NotFound(_)) => Ok(REPORTED),
        Err(e) => Err(e.into()),
    }
}
