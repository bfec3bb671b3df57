//! anonboard - anonymous message board backend
//!
//! Boards hold threads, threads hold replies. Threads and replies can be
//! deleted with the password given at creation and reported to moderators.

pub mod board;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{BoardService, DeleteOutcome, PublicReply, PublicThread, Reply, Thread};
pub use config::Config;
pub use db::Database;
pub use error::{BoardError, Result};
