// ABOUTME: HTTP API layer for Specgen providing REST endpoints and routing
// ABOUTME: Integration layer over the specifications domain package

use axum::{
    routing::{get, post},
    Router,
};

use specgen_specifications::DbState;

pub mod export_handlers;
pub mod specifications_handlers;

/// Creates the specifications API router (nested under /api/specifications)
pub fn create_specifications_router() -> Router<DbState> {
    Router::new()
        .route("/", get(specifications_handlers::list_specifications))
        .route("/generate", post(specifications_handlers::generate_specification))
        .route("/{id}", get(specifications_handlers::get_specification))
}

/// Creates the exports API router (nested under /api/exports)
pub fn create_exports_router() -> Router<DbState> {
    Router::new()
        .route("/html", post(export_handlers::export_html))
        .route("/text", post(export_handlers::export_text))
}
