use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Wishlist {
    pub id: Uuid,
    pub movies: Vec<Uuid>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWishlist {
    #[serde(default)]
    pub movies: Vec<Uuid>,
    pub owner: Uuid,
}

/// Partial update. The owner is deliberately absent: a wishlist can never
/// change hands through PATCH.
#[derive(Debug, Default, Deserialize)]
pub struct WishlistUpdate {
    pub movies: Option<Vec<Uuid>>,
}

impl WishlistUpdate {
    pub fn apply(self, wishlist: &mut Wishlist) {
        if let Some(movies) = self.movies {
            wishlist.movies = movies;
        }
    }
}
