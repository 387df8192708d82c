//! Movie catalog routes. Reads are public; every mutation resolves the
//! resource first, then passes the admin gate, so missing ids always read as
//! 404 and only then can authorization reject with 403.

use axum::{
    extract::{Multipart, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use super::parse_id;
use crate::authz::{self, Caller};
use crate::database::models::{movie, MovieUpdate, NewMovie};
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;
use crate::sanitize::remove_blank_fields;
use crate::storage;

/// GET /movies
pub async fn index() -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let movies = store::movies::list(&pool).await?;
    Ok(Json(json!({ "movies": movies })))
}

/// GET /moviesbystar - top 10 by rating, descending
pub async fn by_star() -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let movies = store::movies::top_by_rating(&pool).await?;
    Ok(Json(json!({ "movies": movies })))
}

/// GET /moviesbydate - top 10 by publish date, descending
pub async fn by_date() -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let movies = store::movies::most_recent(&pool).await?;
    Ok(Json(json!({ "movies": movies })))
}

/// GET /movies/:id
pub async fn show(Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;
    let movie = store::movies::find_or_404(&pool, id).await?;
    Ok(Json(json!({ "movie": movie })))
}

/// POST /movies - multipart form with the poster image; the file is stored
/// first and the resulting URL becomes the movie's image field.
pub async fn create(
    caller: Caller,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    authz::require_admin(&caller)?;

    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut publish_date: Option<DateTime<Utc>> = None;
    let mut rating: Option<f64> = None;
    let mut tag: Option<String> = None;
    let mut trailer_url: Option<String> = None;
    let mut image: Option<(Bytes, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart payload: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => title = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "publish_date" => {
                let raw = read_text(field).await?;
                let parsed = raw.parse::<DateTime<Utc>>().map_err(|_| {
                    ApiError::validation_error(format!("invalid publish_date: {}", raw))
                })?;
                publish_date = Some(parsed);
            }
            "rating" => {
                let raw = read_text(field).await?;
                let parsed = raw
                    .parse::<f64>()
                    .map_err(|_| ApiError::validation_error(format!("invalid rating: {}", raw)))?;
                rating = Some(parsed);
            }
            "tag" => tag = Some(read_text(field).await?).filter(|s| !s.is_empty()),
            "trailer_url" => trailer_url = Some(read_text(field).await?).filter(|s| !s.is_empty()),
            "image" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::bad_request(format!("failed to read image upload: {}", e))
                })?;
                image = Some((data, content_type));
            }
            other => {
                tracing::debug!("Ignoring unknown multipart field: {}", other);
            }
        }
    }

    let title = title.ok_or_else(|| ApiError::validation_error("title is required"))?;
    let description =
        description.ok_or_else(|| ApiError::validation_error("description is required"))?;
    let publish_date =
        publish_date.ok_or_else(|| ApiError::validation_error("publish_date is required"))?;
    let (data, content_type) =
        image.ok_or_else(|| ApiError::validation_error("image file is required"))?;

    let rating = rating.unwrap_or(movie::RATING_MIN);
    if !movie::rating_in_bounds(rating) {
        return Err(ApiError::validation_error(format!(
            "rating must be between {} and {}",
            movie::RATING_MIN,
            movie::RATING_MAX
        )));
    }

    // Upload before the insert; a storage failure aborts the whole create.
    let image_url = storage::image_store()
        .await?
        .upload(data, &content_type)
        .await?;

    let pool = DatabaseManager::pool().await?;
    let created = store::movies::create(
        &pool,
        NewMovie {
            title,
            description,
            image_url,
            publish_date,
            rating,
            tag,
            trailer_url,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "movie": created }))))
}

/// PATCH /movies/:id - blank-stripped partial update
pub async fn update(
    caller: Caller,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let mut existing = store::movies::find_or_404(&pool, id).await?;
    authz::require_admin(&caller)?;

    let sanitized = remove_blank_fields(payload);
    let changes: MovieUpdate = match sanitized.get("movie") {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ApiError::bad_request(format!("invalid movie payload: {}", e)))?,
        None => MovieUpdate::default(),
    };
    changes.apply(&mut existing);

    if !movie::rating_in_bounds(existing.rating) {
        return Err(ApiError::validation_error(format!(
            "rating must be between {} and {}",
            movie::RATING_MIN,
            movie::RATING_MAX
        )));
    }

    store::movies::update(&pool, &existing).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/:id
pub async fn remove(caller: Caller, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    store::movies::find_or_404(&pool, id).await?;
    authz::require_admin(&caller)?;

    store::movies::delete(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart field: {}", e)))
}
