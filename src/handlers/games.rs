//! Game catalog routes. The whole collection, reads included, sits behind
//! the admin gate; no owner field is ever consulted.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use super::parse_id;
use crate::authz::{self, Caller};
use crate::database::models::{GameUpdate, NewGame};
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;
use crate::sanitize::remove_blank_fields;

/// GET /games
pub async fn index(caller: Caller) -> Result<Json<Value>, ApiError> {
    authz::require_admin(&caller)?;
    let pool = DatabaseManager::pool().await?;
    let games = store::games::list(&pool).await?;
    Ok(Json(json!({ "games": games })))
}

/// GET /games/:id
pub async fn show(caller: Caller, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let game = store::games::find_or_404(&pool, id).await?;
    authz::require_admin(&caller)?;

    Ok(Json(json!({ "game": game })))
}

/// POST /games
pub async fn create(
    caller: Caller,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    authz::require_admin(&caller)?;

    let new: NewGame = payload
        .get("game")
        .cloned()
        .ok_or_else(|| ApiError::bad_request("request body must contain a game object"))
        .and_then(|value| {
            serde_json::from_value(value)
                .map_err(|e| ApiError::bad_request(format!("invalid game payload: {}", e)))
        })?;

    if new.title.trim().is_empty() || new.image_url.trim().is_empty() {
        return Err(ApiError::validation_error(
            "title and image_url are required",
        ));
    }

    let pool = DatabaseManager::pool().await?;
    let created = store::games::create(&pool, new).await?;

    Ok((StatusCode::CREATED, Json(json!({ "game": created }))))
}

/// PATCH /games/:id - blank-stripped partial update
pub async fn update(
    caller: Caller,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let mut existing = store::games::find_or_404(&pool, id).await?;
    authz::require_admin(&caller)?;

    let sanitized = remove_blank_fields(payload);
    let changes: GameUpdate = match sanitized.get("game") {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ApiError::bad_request(format!("invalid game payload: {}", e)))?,
        None => GameUpdate::default(),
    };
    changes.apply(&mut existing);

    store::games::update(&pool, &existing).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /games/:id
pub async fn remove(caller: Caller, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    store::games::find_or_404(&pool, id).await?;
    authz::require_admin(&caller)?;

    store::games::delete(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
