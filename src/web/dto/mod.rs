//! Data Transfer Objects for the board API.

pub mod payload;
pub mod request;
pub mod response;

pub use payload::Payload;
pub use request::*;
pub use response::*;
