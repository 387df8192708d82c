use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config;
use crate::error::ApiError;

/// Opaque bearer token: random, unguessable, stored on the user row and
/// rotated on every sign-in.
pub fn generate_token() -> String {
    hex::encode(Sha256::digest(Uuid::new_v4().as_bytes()))
}

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let cost = config::config().security.bcrypt_cost;
    Ok(bcrypt::hash(password, cost)?)
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, ApiError> {
    Ok(bcrypt::verify(password, hashed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_opaque_and_distinct() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn password_round_trip() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }
}
