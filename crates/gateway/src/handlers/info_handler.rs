//! Application metadata handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::openapi::API_TITLE;
use crate::state::AppState;

/// Public description of the API and the identity provider it trusts.
#[derive(Debug, Serialize, ToSchema)]
pub struct AppInfoResponse {
    #[schema(example = "TemplateApp API")]
    pub name: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Identity provider issuing access tokens
    #[schema(example = "http://localhost:8080/realms/templateapp")]
    pub authority: String,
    /// Scope clients must request
    #[schema(example = "templateapp-api")]
    pub scope: String,
}

/// Create info routes
pub fn info_routes() -> Router<AppState> {
    Router::new().route("/info", get(app_info))
}

/// Get application metadata
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "Application",
    responses(
        (status = 200, description = "Application metadata", body = AppInfoResponse)
    )
)]
pub async fn app_info(State(state): State<AppState>) -> Json<AppInfoResponse> {
    let auth = &state.config.auth;

    Json(AppInfoResponse {
        name: API_TITLE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        authority: auth.authority.clone(),
        scope: auth.api_scope.clone(),
    })
}
