//! Reply repository for anonboard.
//!
//! Replies are addressed through their thread, and every thread lookup is
//! scoped by board.

use uuid::Uuid;

use super::reply::{NewReply, Reply, DELETED_TEXT};
use crate::datetime;
use crate::db::DbPool;
use crate::{BoardError, Result};

/// Repository for reply operations.
pub struct ReplyRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ReplyRepository<'a> {
    /// Create a new ReplyRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Append a reply to a thread and bump the thread.
    ///
    /// The bump, the sequence allocation and the insert run in a single
    /// transaction. `bumped_on` becomes the reply's creation time, or one
    /// microsecond past its previous value if the clock has not advanced.
    ///
    /// Returns None if the thread does not exist on the board.
    pub async fn append(
        &self,
        board: &str,
        thread_id: &str,
        new_reply: &NewReply,
    ) -> Result<Option<Reply>> {
        let id = Uuid::new_v4().to_string();
        let now = datetime::to_micros(&datetime::now());

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        // Bumping first takes the write lock on the thread row
        let bumped = sqlx::query(
            "UPDATE threads
             SET bumped_on = CASE WHEN $1 > bumped_on THEN $2 ELSE bumped_on + 1 END
             WHERE id = $3 AND board = $4",
        )
        .bind(now)
        .bind(now)
        .bind(thread_id)
        .bind(board)
        .execute(&mut *tx)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        if bumped.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| BoardError::Database(e.to_string()))?;
            return Ok(None);
        }

        let seq: (i64,) =
            sqlx::query_as("SELECT COALESCE(MAX(seq), 0) + 1 FROM replies WHERE thread_id = $1")
                .bind(thread_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| BoardError::Database(e.to_string()))?;

        sqlx::query(
            "INSERT INTO replies (id, thread_id, seq, text, delete_password, created_on, reported)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&id)
        .bind(thread_id)
        .bind(seq.0)
        .bind(&new_reply.text)
        .bind(&new_reply.delete_password)
        .bind(now)
        .bind(false)
        .execute(&mut *tx)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        self.get(thread_id, &id).await
    }

    /// Get a reply by thread and reply ID.
    pub async fn get(&self, thread_id: &str, id: &str) -> Result<Option<Reply>> {
        let result: Option<ReplyRow> = sqlx::query_as(
            "SELECT id, text, delete_password, created_on, reported
             FROM replies WHERE id = $1 AND thread_id = $2",
        )
        .bind(id)
        .bind(thread_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.map(|row| row.into_reply()))
    }

    /// List all replies of a thread, newest first.
    pub async fn list_by_thread(&self, thread_id: &str) -> Result<Vec<Reply>> {
        let rows: Vec<ReplyRow> = sqlx::query_as(
            "SELECT id, text, delete_password, created_on, reported
             FROM replies WHERE thread_id = $1
             ORDER BY created_on DESC, seq DESC",
        )
        .bind(thread_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.into_reply()).collect())
    }

    /// List the most recent replies of a thread, newest first.
    pub async fn list_recent_by_thread(&self, thread_id: &str, limit: u32) -> Result<Vec<Reply>> {
        let rows: Vec<ReplyRow> = sqlx::query_as(
            "SELECT id, text, delete_password, created_on, reported
             FROM replies WHERE thread_id = $1
             ORDER BY created_on DESC, seq DESC LIMIT $2",
        )
        .bind(thread_id)
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.into_reply()).collect())
    }

    /// Replace the reply text with the deletion marker if the password matches.
    ///
    /// The reply keeps its place in the thread. Returns false if the thread
    /// or reply was not found or the password did not match.
    pub async fn mark_deleted_with_password(
        &self,
        board: &str,
        thread_id: &str,
        id: &str,
        password: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE replies SET text = $1
             WHERE id = $2 AND thread_id = $3 AND delete_password = $4
               AND thread_id IN (SELECT id FROM threads WHERE board = $5)",
        )
        .bind(DELETED_TEXT)
        .bind(id)
        .bind(thread_id)
        .bind(password)
        .bind(board)
        .execute(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Flag a reply as reported.
    ///
    /// Returns false if the thread or reply was not found.
    pub async fn set_reported(&self, board: &str, thread_id: &str, id: &str) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE replies SET reported = $1
             WHERE id = $2 AND thread_id = $3
               AND thread_id IN (SELECT id FROM threads WHERE board = $4)",
        )
        .bind(true)
        .bind(id)
        .bind(thread_id)
        .bind(board)
        .execute(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count replies in a thread.
    pub async fn count_by_thread(&self, thread_id: &str) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM replies WHERE thread_id = $1")
            .bind(thread_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;
        Ok(count.0)
    }
}

/// Internal struct for mapping database rows to Reply.
#[derive(sqlx::FromRow)]
struct ReplyRow {
    id: String,
    text: String,
    delete_password: String,
    created_on: i64,
    reported: bool,
}

impl ReplyRow {
    fn into_reply(self) -> Reply {
        Reply {
            id: self.id,
            text: self.text,
            delete_password: self.delete_password,
            created_on: datetime::from_micros(self.created_on),
            reported: self.reported,
        }
    }
}
