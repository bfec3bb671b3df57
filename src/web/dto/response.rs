//! Response DTOs for the board API.
//!
//! Identifiers are serialized as `_id` for compatibility with existing
//! board clients.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{PublicReply, PublicThread, Reply, Thread};

/// A newly created thread, with all stored fields.
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Board name.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Creation time.
    pub created_on: DateTime<Utc>,
    /// Last bump time.
    pub bumped_on: DateTime<Utc>,
    /// Report flag.
    pub reported: bool,
    /// Deletion password.
    pub delete_password: String,
    /// Replies.
    pub replies: Vec<ReplyResponse>,
}

impl From<Thread> for ThreadResponse {
    fn from(thread: Thread) -> Self {
        Self {
            id: thread.id,
            board: thread.board,
            text: thread.text,
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            reported: thread.reported,
            delete_password: thread.delete_password,
            replies: thread.replies.into_iter().map(ReplyResponse::from).collect(),
        }
    }
}

/// A newly created reply, with all stored fields.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Reply body.
    pub text: String,
    /// Creation time.
    pub created_on: DateTime<Utc>,
    /// Deletion password.
    pub delete_password: String,
    /// Report flag.
    pub reported: bool,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
            delete_password: reply.delete_password,
            reported: reply.reported,
        }
    }
}

/// A thread as shown to readers.
#[derive(Debug, Serialize)]
pub struct PublicThreadResponse {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Board name.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Creation time.
    pub created_on: DateTime<Utc>,
    /// Last bump time.
    pub bumped_on: DateTime<Utc>,
    /// Visible replies.
    pub replies: Vec<PublicReplyResponse>,
}

impl From<PublicThread> for PublicThreadResponse {
    fn from(thread: PublicThread) -> Self {
        Self {
            id: thread.id,
            board: thread.board,
            text: thread.text,
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: thread
                .replies
                .into_iter()
                .map(PublicReplyResponse::from)
                .collect(),
        }
    }
}

/// A reply as shown to readers.
#[derive(Debug, Serialize)]
pub struct PublicReplyResponse {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Reply body.
    pub text: String,
    /// Creation time.
    pub created_on: DateTime<Utc>,
}

impl From<PublicReply> for PublicReplyResponse {
    fn from(reply: PublicReply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
        }
    }
}
