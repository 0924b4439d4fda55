use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/translate", get(handlers::translate))

        // Disabled listing endpoints, same body on both paths
        .route("/phrases", get(handlers::phrases))
        .route("/api/phrases", get(handlers::phrases))

        // Health check
        .route("/api/health", get(handlers::health_check))

        // Front-end assets
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
