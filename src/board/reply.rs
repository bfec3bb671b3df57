//! Reply model for anonboard.

use chrono::{DateTime, Utc};

/// Text a reply is replaced with once its author deletes it.
pub const DELETED_TEXT: &str = "[deleted]";

/// Reply entity. A reply only exists nested within one thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Unique reply ID.
    pub id: String,
    /// Reply body.
    pub text: String,
    /// Password required to delete the reply (stored as given).
    pub delete_password: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Whether the reply was reported to moderators.
    pub reported: bool,
}

/// Reply as shown to board readers: no password, no report flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicReply {
    /// Reply ID.
    pub id: String,
    /// Reply body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<Reply> for PublicReply {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
        }
    }
}

/// Data for appending a reply to a thread.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// Reply body.
    pub text: String,
    /// Password required to delete the reply.
    pub delete_password: String,
}

impl NewReply {
    /// Create a new reply with required fields.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
