use axum::{async_trait, extract::FromRequestParts, http::request::Parts, http::HeaderMap};

use crate::authz::Caller;
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;

/// Bearer-token authentication, run before any handler that declares a
/// [`Caller`] argument. Resolves the opaque token against the users table;
/// a missing or unknown token rejects with 401 and the handler never runs.
#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let pool = DatabaseManager::pool().await?;
        let user = store::users::find_by_token(&pool, &token)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Rejected request with unknown bearer token");
                ApiError::unauthorized("Invalid bearer token")
            })?;

        Ok(Caller {
            id: user.id,
            email: user.email,
            is_admin: user.is_admin,
        })
    }
}

/// Extract the opaque token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err(ApiError::unauthorized("Empty bearer token"));
        }
        Ok(token.to_string())
    } else {
        Err(ApiError::unauthorized(
            "Authorization header must use Bearer token format",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn accepts_bearer_token() {
        let token = extract_bearer_token(&headers_with("Bearer abc123")).unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn rejects_missing_header() {
        let err = extract_bearer_token(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        let err = extract_bearer_token(&headers_with("Basic dXNlcjpwdw==")).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn rejects_empty_token() {
        let err = extract_bearer_token(&headers_with("Bearer ")).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }
}
