//! Database schema and migrations for anonboard.
//!
//! Migrations are applied sequentially when the database is first opened or
//! upgraded. The DDL is kept portable between SQLite and PostgreSQL.

/// Database migrations.
///
/// Each migration is a SQL script executed in order. The schema_version
/// table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: threads and their replies
    r#"
-- Threads; timestamps are microseconds since the Unix epoch
CREATE TABLE threads (
    id              TEXT PRIMARY KEY,
    board           TEXT NOT NULL,
    text            TEXT NOT NULL,
    delete_password TEXT NOT NULL,
    created_on      BIGINT NOT NULL,
    bumped_on       BIGINT NOT NULL,
    reported        BOOLEAN NOT NULL DEFAULT FALSE
);

CREATE INDEX idx_threads_board_bumped ON threads(board, bumped_on DESC);

-- Replies live and die with their thread; seq preserves insertion order
CREATE TABLE replies (
    id              TEXT PRIMARY KEY,
    thread_id       TEXT NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
    seq             BIGINT NOT NULL,
    text            TEXT NOT NULL,
    delete_password TEXT NOT NULL,
    created_on      BIGINT NOT NULL,
    reported        BOOLEAN NOT NULL DEFAULT FALSE,
    UNIQUE (thread_id, seq)
);

CREATE INDEX idx_replies_thread_created ON replies(thread_id, created_on DESC);
"#,
];
