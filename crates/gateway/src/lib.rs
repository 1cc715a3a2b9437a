//! TemplateApp API gateway.
//!
//! Serves the TemplateApp HTTP API together with its OpenAPI document and a
//! Swagger UI that signs in against the configured identity provider.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod swagger;

use std::io::Write;
use std::path::Path;

use axum::Router;
use tracing::info;

use common::{AppError, AppResult};

use crate::config::GatewayConfig;
use crate::openapi::generate_document;
use crate::routes::create_router;
use crate::state::AppState;
use crate::swagger::SwaggerUiSettings;

/// Wire the application: document generation, Swagger UI, then routes.
///
/// Returns a configuration error when the Swagger UI client id is missing.
pub fn build_app(config: GatewayConfig) -> AppResult<Router> {
    let document = generate_document(&config.auth);
    let swagger_ui = SwaggerUiSettings::from_config(&config)?.into_swagger_ui(document);

    Ok(create_router(AppState::new(config), swagger_ui))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> AppResult<()> {
    let addr = config.service.addr();
    let app = build_app(config)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Gateway listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Write the served OpenAPI document as pretty JSON to `output`, or stdout.
pub fn export_openapi(config: &GatewayConfig, output: Option<&Path>) -> AppResult<()> {
    let document = generate_document(&config.auth);
    let json = serde_json::to_string_pretty(&document)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json)?;
            info!("Wrote OpenAPI document to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}
