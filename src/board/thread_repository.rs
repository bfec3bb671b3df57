//! Thread repository for anonboard.
//!
//! This module provides CRUD operations for threads in the database.
//! Every lookup is scoped by board: a thread ID under another board is
//! treated as missing.

use uuid::Uuid;

use super::thread::{NewThread, Thread};
use crate::datetime;
use crate::db::DbPool;
use crate::{BoardError, Result};

/// Repository for thread CRUD operations.
pub struct ThreadRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ThreadRepository<'a> {
    /// Create a new ThreadRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new thread in the database.
    ///
    /// `created_on` and `bumped_on` receive the same instant.
    pub async fn create(&self, new_thread: &NewThread) -> Result<Thread> {
        let id = Uuid::new_v4().to_string();
        let now = datetime::to_micros(&datetime::now());

        sqlx::query(
            "INSERT INTO threads (id, board, text, delete_password, created_on, bumped_on, reported)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&id)
        .bind(&new_thread.board)
        .bind(&new_thread.text)
        .bind(&new_thread.delete_password)
        .bind(now)
        .bind(now)
        .bind(false)
        .execute(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        self.get(&new_thread.board, &id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))
    }

    /// Get a thread by board and ID, without its replies.
    pub async fn get(&self, board: &str, id: &str) -> Result<Option<Thread>> {
        let result: Option<ThreadRow> = sqlx::query_as(
            "SELECT id, board, text, delete_password, created_on, bumped_on, reported
             FROM threads WHERE id = $1 AND board = $2",
        )
        .bind(id)
        .bind(board)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.map(|row| row.into_thread()))
    }

    /// List the most recently bumped threads of a board, without replies.
    ///
    /// Threads bumped in the same microsecond are ordered by ID.
    pub async fn list_recent(&self, board: &str, limit: u32) -> Result<Vec<Thread>> {
        let rows: Vec<ThreadRow> = sqlx::query_as(
            "SELECT id, board, text, delete_password, created_on, bumped_on, reported
             FROM threads WHERE board = $1
             ORDER BY bumped_on DESC, created_on DESC, id DESC LIMIT $2",
        )
        .bind(board)
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.into_thread()).collect())
    }

    /// Delete a thread if the password matches.
    ///
    /// Returns true if a thread was deleted, false if it was not found or the
    /// password did not match. Replies are removed by cascade.
    pub async fn delete_with_password(&self, board: &str, id: &str, password: &str) -> Result<bool> {
        let result =
            sqlx::query("DELETE FROM threads WHERE id = $1 AND board = $2 AND delete_password = $3")
                .bind(id)
                .bind(board)
                .bind(password)
                .execute(self.pool)
                .await
                .map_err(|e| BoardError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Flag a thread as reported.
    ///
    /// Returns false if the thread was not found. Reporting twice is harmless.
    pub async fn set_reported(&self, board: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE threads SET reported = $1 WHERE id = $2 AND board = $3")
            .bind(true)
            .bind(id)
            .bind(board)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count threads on a board.
    pub async fn count_by_board(&self, board: &str) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM threads WHERE board = $1")
            .bind(board)
            .fetch_one(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;
        Ok(count.0)
    }
}

/// Internal struct for mapping database rows to Thread.
#[derive(sqlx::FromRow)]
struct ThreadRow {
    id: String,
    board: String,
    text: String,
    delete_password: String,
    created_on: i64,
    bumped_on: i64,
    reported: bool,
}

impl ThreadRow {
    fn into_thread(self) -> Thread {
        Thread {
            id: self.id,
            board: self.board,
            text: self.text,
            delete_password: self.delete_password,
            created_on: datetime::from_micros(self.created_on),
            bumped_on: datetime::from_micros(self.bumped_on),
            reported: self.reported,
            replies: Vec::new(),
        }
    }
}
