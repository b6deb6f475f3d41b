pub mod pages;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::handlers::page::not_found;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
