//! Token handling rejections that hold regardless of store connectivity:
//! the bearer header is parsed before any lookup happens.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/auth/logout", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .patch(format!("{}/wishlists/{}", server.base_url, uuid_like()))
        .header("Authorization", "Basic dXNlcjpwdw==")
        .json(&json!({ "wishlist": { "movies": [] } }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

fn uuid_like() -> &'static str {
    "8c2e6f7c-0b0a-4f3a-9a9e-3d2f6c1b5a4d"
}
