//! Account endpoints. Tokens are opaque strings stored on the user row:
//! rotated on every sign-in, cleared on sign-out. Every user that leaves
//! these handlers goes through the [`PublicUser`] projection.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth;
use crate::authz::Caller;
use crate::database::models::PublicUser;
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// POST /auth/register
pub async fn register(Json(body): Json<RegisterRequest>) -> Result<impl IntoResponse, ApiError> {
    let email = body.email.trim();
    if email.is_empty() || body.password.is_empty() {
        return Err(ApiError::validation_error("email and password are required"));
    }
    if body.password != body.password_confirmation {
        return Err(ApiError::validation_error(
            "password confirmation does not match",
        ));
    }

    let hashed = auth::hash_password(&body.password)?;
    let pool = DatabaseManager::pool().await?;
    let user = store::users::create(&pool, email, &hashed).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "user": PublicUser::from(user) })),
    ))
}

/// POST /auth/login
pub async fn login(Json(body): Json<LoginRequest>) -> Result<impl IntoResponse, ApiError> {
    let pool = DatabaseManager::pool().await?;

    // Same rejection for unknown email and bad password, so the response
    // does not reveal which accounts exist.
    let user = store::users::find_by_email(&pool, body.email.trim())
        .await?
        .ok_or_else(|| ApiError::unauthorized("invalid email or password"))?;

    if !auth::verify_password(&body.password, &user.hashed_password)? {
        tracing::warn!("Failed sign-in attempt for {}", user.email);
        return Err(ApiError::unauthorized("invalid email or password"));
    }

    let token = auth::generate_token();
    let user = store::users::set_token(&pool, user.id, &token).await?;

    Ok(Json(json!({ "user": PublicUser::from(user) })))
}

/// PATCH /auth/password
pub async fn change_password(
    caller: Caller,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    if body.new_password.is_empty() {
        return Err(ApiError::validation_error("new password must not be empty"));
    }

    let pool = DatabaseManager::pool().await?;
    let user = store::users::find_or_404(&pool, caller.id).await?;

    if !auth::verify_password(&body.old_password, &user.hashed_password)? {
        return Err(ApiError::unauthorized("old password does not match"));
    }

    let hashed = auth::hash_password(&body.new_password)?;
    store::users::set_password(&pool, user.id, &hashed).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /auth/logout
pub async fn logout(caller: Caller) -> Result<StatusCode, ApiError> {
    let pool = DatabaseManager::pool().await?;
    store::users::clear_token(&pool, caller.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
