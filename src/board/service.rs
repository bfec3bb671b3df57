//! Board service for anonboard.
//!
//! This module provides the thread and reply operations exposed by the API,
//! with input validation and the password rules applied on top of the
//! repositories.

use tracing::debug;

use crate::db::Database;
use crate::{BoardError, Result};

use super::reply_repository::ReplyRepository;
use super::thread::{RECENT_REPLY_LIMIT, RECENT_THREAD_LIMIT};
use super::thread_repository::ThreadRepository;
use super::{DeleteOutcome, NewReply, NewThread, PublicThread, Reply, Thread};

/// Ensure a required text field is present.
fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BoardError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Service for thread and reply operations.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Start a new thread on a board.
    pub async fn create_thread(
        &self,
        board: &str,
        text: &str,
        delete_password: &str,
    ) -> Result<Thread> {
        require("text", text)?;
        require("delete_password", delete_password)?;

        let repo = ThreadRepository::new(self.db.pool());
        let thread = repo
            .create(&NewThread::new(board, text, delete_password))
            .await?;
        debug!(board, thread_id = %thread.id, "thread created");
        Ok(thread)
    }

    /// List the most recently bumped threads of a board.
    ///
    /// Each thread carries only its latest replies, newest first.
    pub async fn list_recent(&self, board: &str) -> Result<Vec<PublicThread>> {
        let thread_repo = ThreadRepository::new(self.db.pool());
        let reply_repo = ReplyRepository::new(self.db.pool());

        let threads = thread_repo.list_recent(board, RECENT_THREAD_LIMIT).await?;
        let mut result = Vec::with_capacity(threads.len());
        for mut thread in threads {
            thread.replies = reply_repo
                .list_recent_by_thread(&thread.id, RECENT_REPLY_LIMIT)
                .await?;
            result.push(thread.into_public());
        }
        Ok(result)
    }

    /// Get a single thread with all of its replies, newest first.
    pub async fn get_thread(&self, board: &str, thread_id: &str) -> Result<PublicThread> {
        let thread_repo = ThreadRepository::new(self.db.pool());
        let mut thread = thread_repo
            .get(board, thread_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))?;

        let reply_repo = ReplyRepository::new(self.db.pool());
        thread.replies = reply_repo.list_by_thread(&thread.id).await?;
        Ok(thread.into_public())
    }

    /// Delete a thread and its replies if the password matches.
    ///
    /// A missing thread is reported as an incorrect password.
    pub async fn delete_thread(
        &self,
        board: &str,
        thread_id: &str,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let repo = ThreadRepository::new(self.db.pool());
        if repo.delete_with_password(board, thread_id, password).await? {
            debug!(board, thread_id, "thread deleted");
            Ok(DeleteOutcome::Success)
        } else {
            Ok(DeleteOutcome::IncorrectPassword)
        }
    }

    /// Flag a thread for moderators.
    pub async fn report_thread(&self, board: &str, thread_id: &str) -> Result<()> {
        let repo = ThreadRepository::new(self.db.pool());
        if !repo.set_reported(board, thread_id).await? {
            return Err(BoardError::NotFound("thread".to_string()));
        }
        debug!(board, thread_id, "thread reported");
        Ok(())
    }

    /// Append a reply to a thread, bumping the thread.
    pub async fn add_reply(
        &self,
        board: &str,
        thread_id: &str,
        text: &str,
        delete_password: &str,
    ) -> Result<Reply> {
        require("text", text)?;
        require("delete_password", delete_password)?;

        let repo = ReplyRepository::new(self.db.pool());
        let reply = repo
            .append(board, thread_id, &NewReply::new(text, delete_password))
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))?;
        debug!(board, thread_id, reply_id = %reply.id, "reply added");
        Ok(reply)
    }

    /// Replace a reply's text with the deletion marker if the password matches.
    ///
    /// A missing thread or reply is reported as an incorrect password.
    pub async fn delete_reply(
        &self,
        board: &str,
        thread_id: &str,
        reply_id: &str,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let repo = ReplyRepository::new(self.db.pool());
        if repo
            .mark_deleted_with_password(board, thread_id, reply_id, password)
            .await?
        {
            debug!(board, thread_id, reply_id, "reply deleted");
            Ok(DeleteOutcome::Success)
        } else {
            Ok(DeleteOutcome::IncorrectPassword)
        }
    }

    /// Flag a reply for moderators.
    pub async fn report_reply(&self, board: &str, thread_id: &str, reply_id: &str) -> Result<()> {
        let repo = ReplyRepository::new(self.db.pool());
        if !repo.set_reported(board, thread_id, reply_id).await? {
            return Err(BoardError::NotFound("reply".to_string()));
        }
        debug!(board, thread_id, reply_id, "reply reported");
        Ok(())
    }
}
