use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Legacy sibling of [`crate::database::models::Wishlist`]: same shape, same
/// owner lookup, kept as its own collection because clients still read both.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavoriteMovies {
    pub id: Uuid,
    pub movies: Vec<Uuid>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFavoriteMovies {
    #[serde(default)]
    pub movies: Vec<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FavoriteMoviesUpdate {
    pub movies: Option<Vec<Uuid>>,
}

impl FavoriteMoviesUpdate {
    pub fn apply(self, favorite: &mut FavoriteMovies) {
        if let Some(movies) = self.movies {
            favorite.movies = movies;
        }
    }
}
