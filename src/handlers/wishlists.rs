//! Wishlist routes. The read path resolves the caller's list by owner id;
//! mutation is gated on the stored owner field.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use super::parse_id;
use crate::authz::{self, Caller};
use crate::database::models::{NewWishlist, WishlistUpdate};
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;
use crate::sanitize::remove_blank_fields;

/// GET /wishlists - the caller's own wishlist, null if none exists yet
pub async fn index(caller: Caller) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let wishlist = store::wishlists::find_by_owner(&pool, caller.id).await?;
    Ok(Json(json!({ "wishlist": wishlist })))
}

/// POST /wishlists - the owner comes from the body and must resolve;
/// at most one wishlist per user is enforced at creation.
pub async fn create(Json(payload): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    let new: NewWishlist = payload
        .get("wishlist")
        .cloned()
        .ok_or_else(|| ApiError::bad_request("request body must contain a wishlist object"))
        .and_then(|value| {
            serde_json::from_value(value)
                .map_err(|e| ApiError::bad_request(format!("invalid wishlist payload: {}", e)))
        })?;

    let pool = DatabaseManager::pool().await?;
    if !store::users::exists(&pool, new.owner).await? {
        return Err(ApiError::validation_error(format!(
            "owner {} does not resolve to a user",
            new.owner
        )));
    }

    let created = store::wishlists::create(&pool, new).await?;
    Ok((StatusCode::CREATED, Json(json!({ "wishlist": created }))))
}

/// PATCH /wishlists/:id - ownership-gated, blank-stripped partial update
pub async fn update(
    caller: Caller,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let mut existing = store::wishlists::find_or_404(&pool, id).await?;
    authz::require_ownership(&caller, existing.owner)?;

    let sanitized = remove_blank_fields(payload);
    let changes: WishlistUpdate = match sanitized.get("wishlist") {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ApiError::bad_request(format!("invalid wishlist payload: {}", e)))?,
        None => WishlistUpdate::default(),
    };
    changes.apply(&mut existing);

    store::wishlists::update(&pool, &existing).await?;
    Ok(StatusCode::NO_CONTENT)
}
