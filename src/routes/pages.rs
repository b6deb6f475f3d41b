use axum::{routing::get, Router};
use crate::handlers::page::{catalog_page, health_check};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog_page))
        .route("/health", get(health_check))
}
