use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::search;

#[derive(Debug, Deserialize)]
pub struct TheaterSearch {
    pub location: String,
}

/// POST /searchtheater - proxies the location term to the search provider
pub async fn search(Json(body): Json<TheaterSearch>) -> Result<Json<Value>, ApiError> {
    if body.location.trim().is_empty() {
        return Err(ApiError::validation_error("location is required"));
    }

    let theaters = search::find_theaters(body.location.trim()).await?;
    Ok(Json(json!({ "theaters": theaters })))
}
