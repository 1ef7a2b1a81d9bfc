//! One-time secret generation and hashing. Tokens are random alphanumeric
//! strings handed to the user by email; only their SHA-256 digest is stored.

use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

/// Length of every generated one-time string.
pub const TOKEN_LENGTH: usize = 48;

pub fn generate_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
