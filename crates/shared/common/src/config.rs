//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Path appended to the authority to reach the authorization endpoint.
pub const AUTHORIZATION_PATH: &str = "/protocol/openid-connect/auth";

/// Path appended to the authority to reach the token endpoint.
pub const TOKEN_PATH: &str = "/protocol/openid-connect/token";

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Socket address string (`host:port`).
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Identity provider settings used to document and request access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthOptions {
    /// Base URL of the identity provider (e.g. a Keycloak realm URL)
    pub authority: String,
    /// Scope requested by clients calling the API
    pub api_scope: String,
}

impl AuthOptions {
    pub fn new(authority: impl Into<String>, api_scope: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
            api_scope: api_scope.into(),
        }
    }

    /// OAuth2 authorization endpoint of the authority.
    pub fn authorization_url(&self) -> String {
        format!("{}{}", self.authority, AUTHORIZATION_PATH)
    }

    /// OAuth2 token endpoint of the authority.
    pub fn token_url(&self) -> String {
        format!("{}{}", self.authority, TOKEN_PATH)
    }
}
