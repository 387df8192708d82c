use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub hashed_password: String,
    pub is_admin: bool,
    pub favorites: Vec<Uuid>,
    pub watchlist: Vec<Uuid>,
    pub avatar_url: Option<String>,
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outward representation of a [`User`]. The password hash is absent from the
/// type itself, so no handler can serialize it by accident. Every response
/// that carries a user goes through this projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub is_admin: bool,
    pub favorites: Vec<Uuid>,
    pub watchlist: Vec<Uuid>,
    pub avatar_url: Option<String>,
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_admin: user.is_admin,
            favorites: user.favorites,
            watchlist: user.watchlist,
            avatar_url: user.avatar_url,
            token: user.token,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "ada@example.com".into(),
            hashed_password: "$2b$12$abcdefghijklmnopqrstuv".into(),
            is_admin: false,
            favorites: vec![],
            watchlist: vec![],
            avatar_url: None,
            token: Some("tok".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn public_projection_never_contains_password_hash() {
        let value = serde_json::to_value(PublicUser::from(sample_user())).unwrap();
        assert!(value.get("hashed_password").is_none());
        assert!(value.get("email").is_some());
    }
}
