//! Reply handlers for the board API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::board::BoardService;
use crate::web::dto::{
    CreateReplyRequest, DeleteReplyRequest, Payload, PublicThreadResponse, ReplyResponse,
    ReportReplyRequest, ThreadQuery,
};
use crate::web::error::ApiError;
use crate::web::handlers::{AppState, REPORTED};
use crate::BoardError;

/// POST /api/replies/:board - Reply to a thread.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Payload(req): Payload<CreateReplyRequest>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let service = BoardService::new(&state.db);
    let reply = service
        .add_reply(&board, &req.thread_id, &req.text, &req.delete_password)
        .await?;
    Ok(Json(ReplyResponse::from(reply)))
}

/// GET /api/replies/:board?thread_id= - Show a thread with all replies.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<PublicThreadResponse>, ApiError> {
    let service = BoardService::new(&state.db);
    let thread = service.get_thread(&board, &query.thread_id).await?;
    Ok(Json(PublicThreadResponse::from(thread)))
}

/// DELETE /api/replies/:board - Delete a reply with its password.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Payload(req): Payload<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(&state.db);
    let outcome = service
        .delete_reply(&board, &req.thread_id, &req.reply_id, &req.delete_password)
        .await?;
    Ok(outcome.as_str())
}

/// PUT /api/replies/:board - Report a reply.
///
/// Answers "reported" even when the thread or reply does not exist.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Payload(req): Payload<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(&state.db);
    match service
        .report_reply(&board, &req.thread_id, &req.reply_id)
        .await
    {
        Ok(()) | Err(BoardError::NotFound(_)) => Ok(REPORTED),
        Err(e) => Err(e.into()),
    }
}
