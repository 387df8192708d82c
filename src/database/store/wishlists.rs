use sqlx::PgPool;
use uuid::Uuid;

use super::{is_unique_violation, not_found};
use crate::database::manager::DatabaseError;
use crate::database::models::{NewWishlist, Wishlist};

/// The read path resolves a wishlist by its owner, not by list id.
pub async fn find_by_owner(pool: &PgPool, owner: Uuid) -> Result<Option<Wishlist>, DatabaseError> {
    let wishlist = sqlx::query_as::<_, Wishlist>("SELECT * FROM wishlists WHERE owner = $1")
        .bind(owner)
        .fetch_optional(pool)
        .await?;
    Ok(wishlist)
}

pub async fn find_or_404(pool: &PgPool, id: Uuid) -> Result<Wishlist, DatabaseError> {
    match sqlx::query_as::<_, Wishlist>("SELECT * FROM wishlists WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
    {
        Ok(wishlist) => Ok(wishlist),
        Err(sqlx::Error::RowNotFound) => Err(not_found("wishlist", id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn create(pool: &PgPool, new: NewWishlist) -> Result<Wishlist, DatabaseError> {
    match sqlx::query_as::<_, Wishlist>(
        "INSERT INTO wishlists (movies, owner) VALUES ($1, $2) RETURNING *",
    )
    .bind(new.movies)
    .bind(new.owner)
    .fetch_one(pool)
    .await
    {
        Ok(wishlist) => Ok(wishlist),
        Err(e) if is_unique_violation(&e) => Err(DatabaseError::Conflict(
            "user already has a wishlist".to_string(),
        )),
        Err(other) => Err(other.into()),
    }
}

pub async fn update(pool: &PgPool, wishlist: &Wishlist) -> Result<Wishlist, DatabaseError> {
    match sqlx::query_as::<_, Wishlist>(
        "UPDATE wishlists SET movies = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(wishlist.id)
    .bind(&wishlist.movies)
    .fetch_one(pool)
    .await
    {
        Ok(updated) => Ok(updated),
        Err(sqlx::Error::RowNotFound) => Err(not_found("wishlist", wishlist.id)),
        Err(other) => Err(other.into()),
    }
}
