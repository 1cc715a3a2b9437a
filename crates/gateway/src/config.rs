//! Gateway configuration.

use std::env;

use common::{AuthOptions, ServiceConfig};

/// Environment variable holding the Swagger UI OAuth client id.
pub const SWAGGER_CLIENT_ID_VAR: &str = "SWAGGERUI_CLIENTID";

/// Default identity provider root (local Keycloak realm).
pub const DEFAULT_AUTHORITY: &str = "http://localhost:8080/realms/templateapp";

/// Default scope requested by API clients.
pub const DEFAULT_API_SCOPE: &str = "templateapp-api";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Gateway configuration.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Bind address and service name
    pub service: ServiceConfig,
    /// Identity provider settings
    pub auth: AuthOptions,
    /// OAuth client id used by Swagger UI (required to serve)
    pub swagger_client_id: Option<String>,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("service", &self.service)
            .field("auth", &self.auth)
            .field(
                "swagger_client_id",
                &self.swagger_client_id.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// The Swagger UI client id is not validated here; it is checked when the
    /// UI is wired so that commands which never serve the UI still work.
    pub fn from_env() -> Self {
        let authority = env::var("AUTH_AUTHORITY").unwrap_or_else(|_| {
            tracing::warn!(
                "AUTH_AUTHORITY not set, using default {}",
                DEFAULT_AUTHORITY
            );
            DEFAULT_AUTHORITY.to_string()
        });

        let api_scope = env::var("AUTH_API_SCOPE").unwrap_or_else(|_| {
            tracing::warn!("AUTH_API_SCOPE not set, using default {}", DEFAULT_API_SCOPE);
            DEFAULT_API_SCOPE.to_string()
        });

        Self {
            service: ServiceConfig {
                service_name: "templateapp-gateway".to_string(),
                host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_port(env::var("GATEWAY_PORT").ok()),
            },
            auth: AuthOptions::new(authority, api_scope),
            swagger_client_id: env::var(SWAGGER_CLIENT_ID_VAR).ok(),
        }
    }
}

/// Parse `GATEWAY_PORT`, falling back to the default port when unset or invalid.
fn parse_port(value: Option<String>) -> u16 {
    match value {
        None => DEFAULT_PORT,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                "GATEWAY_PORT {:?} is not a valid port, using default {}",
                raw,
                DEFAULT_PORT
            );
            DEFAULT_PORT
        }),
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "templateapp-gateway".to_string(),
                ..Default::default()
            },
            auth: AuthOptions::new(DEFAULT_AUTHORITY, DEFAULT_API_SCOPE),
            swagger_client_id: None,
        }
    }
}
