//! Data models shared across database access and API handlers.

pub mod reset_token;
pub mod response;
pub mod user;
pub mod verification_token;
