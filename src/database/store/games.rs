use sqlx::PgPool;
use uuid::Uuid;

use super::not_found;
use crate::database::manager::DatabaseError;
use crate::database::models::{Game, NewGame};

pub async fn list(pool: &PgPool) -> Result<Vec<Game>, DatabaseError> {
    let games = sqlx::query_as::<_, Game>("SELECT * FROM games")
        .fetch_all(pool)
        .await?;
    Ok(games)
}

pub async fn find_or_404(pool: &PgPool, id: Uuid) -> Result<Game, DatabaseError> {
    match sqlx::query_as::<_, Game>("SELECT * FROM games WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
    {
        Ok(game) => Ok(game),
        Err(sqlx::Error::RowNotFound) => Err(not_found("game", id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn create(pool: &PgPool, new: NewGame) -> Result<Game, DatabaseError> {
    let game = sqlx::query_as::<_, Game>(
        "INSERT INTO games (title, image_url, urls) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(new.title)
    .bind(new.image_url)
    .bind(new.urls)
    .fetch_one(pool)
    .await?;
    Ok(game)
}

pub async fn update(pool: &PgPool, game: &Game) -> Result<Game, DatabaseError> {
    match sqlx::query_as::<_, Game>(
        r#"
        UPDATE games
        SET title = $2, image_url = $3, urls = $4, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(game.id)
    .bind(&game.title)
    .bind(&game.image_url)
    .bind(&game.urls)
    .fetch_one(pool)
    .await
    {
        Ok(updated) => Ok(updated),
        Err(sqlx::Error::RowNotFound) => Err(not_found("game", game.id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), DatabaseError> {
    let result = sqlx::query("DELETE FROM games WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(not_found("game", id));
    }
    Ok(())
}
