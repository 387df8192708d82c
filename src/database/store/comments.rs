use sqlx::PgPool;
use uuid::Uuid;

use super::not_found;
use crate::database::manager::DatabaseError;
use crate::database::models::{Comment, NewComment};

pub async fn list_for_movie(pool: &PgPool, movie: Uuid) -> Result<Vec<Comment>, DatabaseError> {
    let comments =
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE movie = $1 ORDER BY created_at")
            .bind(movie)
            .fetch_all(pool)
            .await?;
    Ok(comments)
}

pub async fn find_or_404(pool: &PgPool, id: Uuid) -> Result<Comment, DatabaseError> {
    match sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
    {
        Ok(comment) => Ok(comment),
        Err(sqlx::Error::RowNotFound) => Err(not_found("comment", id)),
        Err(other) => Err(other.into()),
    }
}

/// Inserts the comment and appends its id to the movie's comment list.
pub async fn create(
    pool: &PgPool,
    new: NewComment,
    owner: Uuid,
) -> Result<Comment, DatabaseError> {
    let comment = sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (text, movie, owner) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(new.text)
    .bind(new.movie)
    .bind(owner)
    .fetch_one(pool)
    .await?;

    sqlx::query("UPDATE movies SET comments = array_append(comments, $2) WHERE id = $1")
        .bind(comment.movie)
        .bind(comment.id)
        .execute(pool)
        .await?;

    Ok(comment)
}

pub async fn update(pool: &PgPool, comment: &Comment) -> Result<Comment, DatabaseError> {
    match sqlx::query_as::<_, Comment>(
        "UPDATE comments SET text = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(comment.id)
    .bind(&comment.text)
    .fetch_one(pool)
    .await
    {
        Ok(updated) => Ok(updated),
        Err(sqlx::Error::RowNotFound) => Err(not_found("comment", comment.id)),
        Err(other) => Err(other.into()),
    }
}

pub async fn delete(pool: &PgPool, id: Uuid, movie: Uuid) -> Result<(), DatabaseError> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(not_found("comment", id));
    }

    sqlx::query("UPDATE movies SET comments = array_remove(comments, $2) WHERE id = $1")
        .bind(movie)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Records a like; removes any standing dislike first so a user appears in
/// at most one of the two lists.
pub async fn like(pool: &PgPool, id: Uuid, user: Uuid) -> Result<Comment, DatabaseError> {
    react(pool, id, user, "likes", "unlikes").await
}

pub async fn unlike(pool: &PgPool, id: Uuid, user: Uuid) -> Result<Comment, DatabaseError> {
    react(pool, id, user, "unlikes", "likes").await
}

async fn react(
    pool: &PgPool,
    id: Uuid,
    user: Uuid,
    add_to: &str,
    remove_from: &str,
) -> Result<Comment, DatabaseError> {
    let sql = format!(
        r#"
        UPDATE comments
        SET {add} = array_append(array_remove({add}, $2), $2),
            {rem} = array_remove({rem}, $2),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
        add = add_to,
        rem = remove_from,
    );
    match sqlx::query_as::<_, Comment>(&sql)
        .bind(id)
        .bind(user)
        .fetch_one(pool)
        .await
    {
        Ok(comment) => Ok(comment),
        Err(sqlx::Error::RowNotFound) => Err(not_found("comment", id)),
        Err(other) => Err(other.into()),
    }
}
