//! Request DTOs for the board API.
//!
//! Every field defaults to an empty string so that missing fields reach
//! the board service, which decides whether they are required.

use serde::Deserialize;

/// POST /api/threads/:board
#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    /// Thread body.
    #[serde(default)]
    pub text: String,
    /// Password for later deletion.
    #[serde(default)]
    pub delete_password: String,
}

/// DELETE /api/threads/:board
#[derive(Debug, Deserialize)]
pub struct DeleteThreadRequest {
    /// Thread to delete.
    #[serde(default)]
    pub thread_id: String,
    /// Password given at creation.
    #[serde(default)]
    pub delete_password: String,
}

/// PUT /api/threads/:board
#[derive(Debug, Deserialize)]
pub struct ReportThreadRequest {
    /// Thread to report.
    #[serde(default)]
    pub thread_id: String,
}

/// POST /api/replies/:board
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    /// Thread to reply to.
    #[serde(default)]
    pub thread_id: String,
    /// Reply body.
    #[serde(default)]
    pub text: String,
    /// Password for later deletion.
    #[serde(default)]
    pub delete_password: String,
}

/// DELETE /api/replies/:board
#[derive(Debug, Deserialize)]
pub struct DeleteReplyRequest {
    /// Thread the reply belongs to.
    #[serde(default)]
    pub thread_id: String,
    /// Reply to delete.
    #[serde(default)]
    pub reply_id: String,
    /// Password given at creation.
    #[serde(default)]
    pub delete_password: String,
}

/// PUT /api/replies/:board
#[derive(Debug, Deserialize)]
pub struct ReportReplyRequest {
    /// Thread the reply belongs to.
    #[serde(default)]
    pub thread_id: String,
    /// Reply to report.
    #[serde(default)]
    pub reply_id: String,
}

/// GET /api/replies/:board?thread_id=
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// Thread to show.
    #[serde(default)]
    pub thread_id: String,
}
