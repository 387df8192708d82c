//! Favorite-movies routes: the legacy sibling of the wishlist grouping.
//! Same owner lookup on read, same ownership gate on mutation; the owner is
//! always the authenticated caller at creation.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use super::parse_id;
use crate::authz::{self, Caller};
use crate::database::models::{FavoriteMoviesUpdate, NewFavoriteMovies};
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;
use crate::sanitize::remove_blank_fields;

/// GET /favorites - the caller's favorites record, null if none exists yet
pub async fn index(caller: Caller) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let favorite = store::favorites::find_by_owner(&pool, caller.id).await?;
    Ok(Json(json!({ "favorite": favorite })))
}

/// POST /favorites
pub async fn create(
    caller: Caller,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new: NewFavoriteMovies = match payload.get("favorite") {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ApiError::bad_request(format!("invalid favorite payload: {}", e)))?,
        None => NewFavoriteMovies { movies: vec![] },
    };

    let pool = DatabaseManager::pool().await?;
    let created = store::favorites::create(&pool, new, caller.id).await?;
    Ok((StatusCode::CREATED, Json(json!({ "favorite": created }))))
}

/// PATCH /favorites/:id - ownership-gated, blank-stripped partial update
pub async fn update(
    caller: Caller,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let mut existing = store::favorites::find_or_404(&pool, id).await?;
    authz::require_ownership(&caller, existing.owner)?;

    let sanitized = remove_blank_fields(payload);
    let changes: FavoriteMoviesUpdate = match sanitized.get("favorite") {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ApiError::bad_request(format!("invalid favorite payload: {}", e)))?,
        None => FavoriteMoviesUpdate::default(),
    };
    changes.apply(&mut existing);

    store::favorites::update(&pool, &existing).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /favorites/:id - ownership-gated
pub async fn remove(caller: Caller, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let existing = store::favorites::find_or_404(&pool, id).await?;
    authz::require_ownership(&caller, existing.owner)?;

    store::favorites::delete(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
