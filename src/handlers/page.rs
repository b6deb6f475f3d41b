// src/handlers/page.rs
use axum::{extract::State, http::Uri, response::Html};
use tracing::{debug, instrument};

use crate::components::App;
use crate::error::AppError;
use crate::state::AppState;

// GET / - Render the catalog page
//
// Each request is one mount of the page. If the client goes away the handler
// future is dropped with the app, which cancels the outstanding fetch.
#[instrument(skip(state))]
pub async fn catalog_page(State(state): State<AppState>) -> Html<String> {
    let mut app = App::new(state.catalog.clone());
    app.mount();
    app.settled().await;

    debug!(rows = app.listing().products().len(), "Rendering catalog page");
    Html(app.render_document())
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}
