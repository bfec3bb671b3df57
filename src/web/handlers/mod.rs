//! API handlers for the board.

pub mod reply;
pub mod thread;

pub use reply::*;
pub use thread::*;

use std::sync::Arc;

use crate::Database;

/// Database handle shared by all handlers.
pub type SharedDatabase = Arc<Database>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: SharedDatabase,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase) -> Self {
        Self { db }
    }
}

/// Response text for report requests.
pub(crate) const REPORTED: &str = "reported";
