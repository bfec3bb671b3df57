//! Thread model for anonboard.

use chrono::{DateTime, Utc};

use super::reply::{PublicReply, Reply};

/// Number of threads returned by the board listing.
pub const RECENT_THREAD_LIMIT: u32 = 10;

/// Number of replies kept per thread in the board listing.
pub const RECENT_REPLY_LIMIT: u32 = 3;

/// Thread entity representing a top-level post on a board.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    /// Unique thread ID.
    pub id: String,
    /// Name of the board this thread belongs to.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Password required to delete the thread (stored as given).
    pub delete_password: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last bump timestamp (creation or latest reply).
    pub bumped_on: DateTime<Utc>,
    /// Whether the thread was reported to moderators.
    pub reported: bool,
    /// Replies; order depends on the query that loaded them.
    pub replies: Vec<Reply>,
}

impl Thread {
    /// Public view of this thread and all loaded replies.
    pub fn into_public(self) -> PublicThread {
        PublicThread {
            id: self.id,
            board: self.board,
            text: self.text,
            created_on: self.created_on,
            bumped_on: self.bumped_on,
            replies: self.replies.into_iter().map(PublicReply::from).collect(),
        }
    }
}

/// Thread as shown to board readers: no password, no report flag at any level.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicThread {
    /// Thread ID.
    pub id: String,
    /// Board name.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last bump timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Visible replies.
    pub replies: Vec<PublicReply>,
}

/// Data for creating a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Board to post the thread on.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Password required to delete the thread.
    pub delete_password: String,
}

impl NewThread {
    /// Create a new thread with required fields.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}

/// Result of a password-gated delete.
///
/// A wrong password is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The password matched and the delete was applied.
    Success,
    /// Nothing was changed.
    IncorrectPassword,
}

impl DeleteOutcome {
    /// Response text for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteOutcome::Success => "success",
            DeleteOutcome::IncorrectPassword => "incorrect password",
        }
    }
}
