//! bistro-web library - HTTP surface for the Bistro review application

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::index))
        .route("/create", get(api::create_restaurant_form))
        .route("/add", post(api::add_restaurant))
        .route("/review/:restaurant_id", post(api::add_review))
        .route("/:restaurant_id", get(api::details))
        .route("/favicon.ico", get(api::serve_favicon))
        .route("/static/style.css", get(api::serve_style_css))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
