//! Web API module for anonboard.
//!
//! This module exposes the board over HTTP: routes under `/api/threads`
//! and `/api/replies`, plus a health check.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
