pub mod auth;
pub mod comments;
pub mod favorites;
pub mod games;
pub mod movies;
pub mod theaters;
pub mod wishlists;

use uuid::Uuid;

use crate::error::ApiError;

/// Route ids are parsed by hand so a malformed id reads as a resource that
/// does not exist (404), not as a differently-shaped request (400).
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(format!("resource {} not found", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_ids_read_as_not_found() {
        let err = parse_id("definitely-not-a-uuid").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn well_formed_ids_parse() {
        assert!(parse_id("8c2e6f7c-0b0a-4f3a-9a9e-3d2f6c1b5a4d").is_ok());
    }
}
