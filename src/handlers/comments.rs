//! Comment routes. Comments are user content: creation requires the target
//! movie to resolve, text edits and deletion are ownership-gated, and the
//! like/unlike reactions are open to any authenticated caller.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use super::parse_id;
use crate::authz::{self, Caller};
use crate::database::models::{CommentUpdate, NewComment};
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;
use crate::sanitize::remove_blank_fields;

/// GET /movies/:id/comments
pub async fn index_for_movie(Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let movie = store::movies::find_or_404(&pool, id).await?;
    let comments = store::comments::list_for_movie(&pool, movie.id).await?;
    Ok(Json(json!({ "comments": comments })))
}

/// POST /comments - the movie reference must resolve; the owner is the caller
pub async fn create(
    caller: Caller,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new: NewComment = payload
        .get("comment")
        .cloned()
        .ok_or_else(|| ApiError::bad_request("request body must contain a comment object"))
        .and_then(|value| {
            serde_json::from_value(value)
                .map_err(|e| ApiError::bad_request(format!("invalid comment payload: {}", e)))
        })?;

    if new.text.trim().is_empty() {
        return Err(ApiError::validation_error("comment text is required"));
    }

    let pool = DatabaseManager::pool().await?;
    store::movies::find_or_404(&pool, new.movie).await?;

    let created = store::comments::create(&pool, new, caller.id).await?;
    Ok((StatusCode::CREATED, Json(json!({ "comment": created }))))
}

/// PATCH /comments/:id - ownership-gated, blank-stripped text update
pub async fn update(
    caller: Caller,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let mut existing = store::comments::find_or_404(&pool, id).await?;
    authz::require_ownership(&caller, existing.owner)?;

    let sanitized = remove_blank_fields(payload);
    let changes: CommentUpdate = match sanitized.get("comment") {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ApiError::bad_request(format!("invalid comment payload: {}", e)))?,
        None => CommentUpdate::default(),
    };
    changes.apply(&mut existing);

    store::comments::update(&pool, &existing).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /comments/:id - ownership-gated; the id is also removed from the
/// movie's comment list
pub async fn remove(caller: Caller, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let existing = store::comments::find_or_404(&pool, id).await?;
    authz::require_ownership(&caller, existing.owner)?;

    store::comments::delete(&pool, id, existing.movie).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /comments/:id/like
pub async fn like(caller: Caller, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    store::comments::find_or_404(&pool, id).await?;
    let comment = store::comments::like(&pool, id, caller.id).await?;
    Ok(Json(json!({ "comment": comment })))
}

/// POST /comments/:id/unlike
pub async fn unlike(caller: Caller, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    store::comments::find_or_404(&pool, id).await?;
    let comment = store::comments::unlike(&pool, id, caller.id).await?;
    Ok(Json(json!({ "comment": comment })))
}
