//! Board module for anonboard.
//!
//! This module provides the anonymous message board:
//! - Threads scoped by board name, ordered by their last bump
//! - Replies nested in exactly one thread
//! - Password-gated deletion and moderator reporting

mod reply;
mod reply_repository;
mod service;
mod thread;
mod thread_repository;

pub use reply::{NewReply, PublicReply, Reply, DELETED_TEXT};
pub use reply_repository::ReplyRepository;
pub use service::BoardService;
pub use thread::{
    DeleteOutcome, NewThread, PublicThread, Thread, RECENT_REPLY_LIMIT, RECENT_THREAD_LIMIT,
};
pub use thread_repository::ThreadRepository;
