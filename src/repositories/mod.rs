pub mod reset_token;
pub mod user;
pub mod verification_token;
