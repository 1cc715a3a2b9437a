//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use common::AppError;

use crate::handlers::{health_routes, info_routes};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, swagger_ui: SwaggerUi) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Application endpoints
        .nest("/api", info_routes())
        // Swagger UI and the OpenAPI document
        .merge(swagger_ui)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
