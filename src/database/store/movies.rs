use sqlx::PgPool;
use uuid::Uuid;

use super::not_found;
use crate::database::manager::DatabaseError;
use crate::database::models::{Movie, NewMovie};

/// Cap on the curated listings; ties beyond the cap fall off in store order.
pub const TOP_LIST_LIMIT: i64 = 10;

pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, DatabaseError> {
    let movies = sqlx::query_as::<_, Movie>("SELECT * FROM movies")
        .fetch_all(pool)
        .await?;
    Ok(movies)
}

pub async fn top_by_rating(pool: &PgPool) -> Result<Vec<Movie>, DatabaseError> {
    let movies =
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY rating DESC LIMIT $1")
            .bind(TOP_LIST_LIMIT)
            .fetch_all(pool)
            .await?;
    Ok(movies)
}

pub async fn most_recent(pool: &PgPool) -> Result<Vec<Movie>, DatabaseError> {
    let movies =
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY publish_date DESC LIMIT $1")
            .bind(TOP_LIST_LIMIT)
            .fetch_all(pool)
            .await?;
    Ok(movies)
}

pub async fn find_or_404(pool: &PgPool, id: Uuid) -> Result<Movie, DatabaseError> {
    match sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
    {
        Ok(movie) => Ok(movie),
        Err(sqlx::Error::RowNotFound) => Err(not_found("movie", id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn create(pool: &PgPool, new: NewMovie) -> Result<Movie, DatabaseError> {
    let movie = sqlx::query_as::<_, Movie>(
        r#"
        INSERT INTO movies (title, description, image_url, publish_date, rating, tag, trailer_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(new.title)
    .bind(new.description)
    .bind(new.image_url)
    .bind(new.publish_date)
    .bind(new.rating)
    .bind(new.tag)
    .bind(new.trailer_url)
    .fetch_one(pool)
    .await?;
    Ok(movie)
}

/// Writes the merged entity back. A row that vanished between the existence
/// check and this write surfaces as NotFound rather than a 500.
pub async fn update(pool: &PgPool, movie: &Movie) -> Result<Movie, DatabaseError> {
    match sqlx::query_as::<_, Movie>(
        r#"
        UPDATE movies
        SET title = $2, description = $3, image_url = $4, publish_date = $5,
            rating = $6, tag = $7, trailer_url = $8, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(movie.id)
    .bind(&movie.title)
    .bind(&movie.description)
    .bind(&movie.image_url)
    .bind(movie.publish_date)
    .bind(movie.rating)
    .bind(&movie.tag)
    .bind(&movie.trailer_url)
    .fetch_one(pool)
    .await
    {
        Ok(updated) => Ok(updated),
        Err(sqlx::Error::RowNotFound) => Err(not_found("movie", movie.id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), DatabaseError> {
    let result = sqlx::query("DELETE FROM movies WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(not_found("movie", id));
    }
    Ok(())
}
