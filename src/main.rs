use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use reel_api::{config, database::DatabaseManager, handlers};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, AWS_BUCKET_NAME, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Reel API in {:?} mode", config.environment);

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Reel API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let mut app = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Entity routes; per-route authentication happens in the handlers'
        // caller extractor, per-route authorization in the handlers themselves
        .merge(auth_routes())
        .merge(movie_routes())
        .merge(game_routes())
        .merge(comment_routes())
        .merge(list_routes())
        .route("/searchtheater", post(handlers::theaters::search))
        // Global middleware
        .layer(TraceLayer::new_for_http());

    if config::config().server.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

fn auth_routes() -> Router {
    use handlers::auth;

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/password", patch(auth::change_password))
        .route("/auth/logout", delete(auth::logout))
}

fn movie_routes() -> Router {
    use handlers::{comments, movies};

    Router::new()
        // Reads are public; mutations are admin-gated in the handlers
        .route("/movies", get(movies::index).post(movies::create))
        .route("/moviesbystar", get(movies::by_star))
        .route("/moviesbydate", get(movies::by_date))
        .route(
            "/movies/:id",
            get(movies::show)
                .patch(movies::update)
                .delete(movies::remove),
        )
        .route("/movies/:id/comments", get(comments::index_for_movie))
}

fn game_routes() -> Router {
    use handlers::games;

    Router::new()
        .route("/games", get(games::index).post(games::create))
        .route(
            "/games/:id",
            get(games::show).patch(games::update).delete(games::remove),
        )
}

fn comment_routes() -> Router {
    use handlers::comments;

    Router::new()
        .route("/comments", post(comments::create))
        .route(
            "/comments/:id",
            patch(comments::update).delete(comments::remove),
        )
        .route("/comments/:id/like", post(comments::like))
        .route("/comments/:id/unlike", post(comments::unlike))
}

fn list_routes() -> Router {
    use handlers::{favorites, wishlists};

    Router::new()
        .route(
            "/wishlists",
            get(wishlists::index).post(wishlists::create),
        )
        .route("/wishlists/:id", patch(wishlists::update))
        .route("/favorites", get(favorites::index).post(favorites::create))
        .route(
            "/favorites/:id",
            patch(favorites::update).delete(favorites::remove),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Reel API",
            "version": version,
            "description": "Movie catalogue REST backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/auth/register, /auth/login (public), /auth/password, /auth/logout (bearer token)",
                "movies": "/movies, /moviesbystar, /moviesbydate, /movies/:id (public reads, admin writes)",
                "games": "/games[/:id] (admin)",
                "comments": "/comments[/:id], /comments/:id/like, /comments/:id/unlike (bearer token)",
                "wishlists": "/wishlists[/:id] (bearer token, owner-gated)",
                "favorites": "/favorites[/:id] (bearer token, owner-gated)",
                "search": "/searchtheater (public)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
