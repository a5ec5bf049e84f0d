pub mod app_config;
pub mod destinations;
pub mod error;
pub mod flights;
pub mod state;

pub use state::AppState;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/flights/search", get(flights::search_flights))
        .route(
            "/v1/destinations/recommendations",
            post(destinations::recommend_destinations),
        )
        .route(
            "/v1/destinations/anywhere",
            post(destinations::anywhere_search),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
