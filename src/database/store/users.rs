use sqlx::PgPool;
use uuid::Uuid;

use super::{is_unique_violation, not_found};
use crate::database::manager::DatabaseError;
use crate::database::models::User;

pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE token = $1")
        .bind(token)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_or_404(pool: &PgPool, id: Uuid) -> Result<User, DatabaseError> {
    match sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
    {
        Ok(user) => Ok(user),
        Err(sqlx::Error::RowNotFound) => Err(not_found("user", id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
    let (found,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(found)
}

pub async fn create(
    pool: &PgPool,
    email: &str,
    hashed_password: &str,
) -> Result<User, DatabaseError> {
    match sqlx::query_as::<_, User>(
        "INSERT INTO users (email, hashed_password) VALUES ($1, $2) RETURNING *",
    )
    .bind(email)
    .bind(hashed_password)
    .fetch_one(pool)
    .await
    {
        Ok(user) => Ok(user),
        Err(e) if is_unique_violation(&e) => Err(DatabaseError::Conflict(format!(
            "email {} is already registered",
            email
        ))),
        Err(other) => Err(other.into()),
    }
}

pub async fn set_token(pool: &PgPool, id: Uuid, token: &str) -> Result<User, DatabaseError> {
    match sqlx::query_as::<_, User>(
        "UPDATE users SET token = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(token)
    .fetch_one(pool)
    .await
    {
        Ok(user) => Ok(user),
        Err(sqlx::Error::RowNotFound) => Err(not_found("user", id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn clear_token(pool: &PgPool, id: Uuid) -> Result<(), DatabaseError> {
    sqlx::query("UPDATE users SET token = NULL, updated_at = now() WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn set_password(
    pool: &PgPool,
    id: Uuid,
    hashed_password: &str,
) -> Result<(), DatabaseError> {
    let result =
        sqlx::query("UPDATE users SET hashed_password = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(hashed_password)
            .execute(pool)
            .await?;
    if result.rows_affected() == 0 {
        return Err(not_found("user", id));
    }
    Ok(())
}
