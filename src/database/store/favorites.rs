use sqlx::PgPool;
use uuid::Uuid;

use super::{is_unique_violation, not_found};
use crate::database::manager::DatabaseError;
use crate::database::models::{FavoriteMovies, NewFavoriteMovies};

pub async fn find_by_owner(
    pool: &PgPool,
    owner: Uuid,
) -> Result<Option<FavoriteMovies>, DatabaseError> {
    let favorite =
        sqlx::query_as::<_, FavoriteMovies>("SELECT * FROM favorite_movies WHERE owner = $1")
            .bind(owner)
            .fetch_optional(pool)
            .await?;
    Ok(favorite)
}

pub async fn find_or_404(pool: &PgPool, id: Uuid) -> Result<FavoriteMovies, DatabaseError> {
    match sqlx::query_as::<_, FavoriteMovies>("SELECT * FROM favorite_movies WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
    {
        Ok(favorite) => Ok(favorite),
        Err(sqlx::Error::RowNotFound) => Err(not_found("favorites record", id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn create(
    pool: &PgPool,
    new: NewFavoriteMovies,
    owner: Uuid,
) -> Result<FavoriteMovies, DatabaseError> {
    match sqlx::query_as::<_, FavoriteMovies>(
        "INSERT INTO favorite_movies (movies, owner) VALUES ($1, $2) RETURNING *",
    )
    .bind(new.movies)
    .bind(owner)
    .fetch_one(pool)
    .await
    {
        Ok(favorite) => Ok(favorite),
        Err(e) if is_unique_violation(&e) => Err(DatabaseError::Conflict(
            "user already has a favorites record".to_string(),
        )),
        Err(other) => Err(other.into()),
    }
}

pub async fn update(
    pool: &PgPool,
    favorite: &FavoriteMovies,
) -> Result<FavoriteMovies, DatabaseError> {
    match sqlx::query_as::<_, FavoriteMovies>(
        "UPDATE favorite_movies SET movies = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(favorite.id)
    .bind(&favorite.movies)
    .fetch_one(pool)
    .await
    {
        Ok(updated) => Ok(updated),
        Err(sqlx::Error::RowNotFound) => Err(not_found("favorites record", favorite.id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), DatabaseError> {
    let result = sqlx::query("DELETE FROM favorite_movies WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(not_found("favorites record", id));
    }
    Ok(())
}
