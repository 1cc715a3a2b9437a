//! Swagger UI wiring.
//!
//! The UI is configured as a public OAuth2 client of the identity provider:
//! it logs in with the authorization-code flow plus PKCE and keeps the
//! obtained token across page reloads.

use common::{AppError, AppResult};
use utoipa::openapi::OpenApi;
use utoipa_swagger_ui::{oauth, Config, SwaggerUi, Url};

use crate::config::{GatewayConfig, SWAGGER_CLIENT_ID_VAR};
use crate::openapi::API_TITLE;

/// Route serving the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Route serving the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Resolved Swagger UI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwaggerUiSettings {
    pub document_url: &'static str,
    pub display_name: &'static str,
    pub client_id: String,
    pub scopes: Vec<String>,
    pub use_pkce: bool,
    pub persist_authorization: bool,
}

impl SwaggerUiSettings {
    /// Resolve the settings from configuration.
    ///
    /// Fails when the OAuth client id is missing or blank; the gateway must not
    /// start serving without it.
    pub fn from_config(config: &GatewayConfig) -> AppResult<Self> {
        let client_id = config
            .swagger_client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "{} must be set to the Swagger UI OAuth client id",
                    SWAGGER_CLIENT_ID_VAR
                ))
            })?;

        Ok(Self {
            document_url: OPENAPI_JSON_PATH,
            display_name: API_TITLE,
            client_id: client_id.to_string(),
            scopes: vec![config.auth.api_scope.clone()],
            use_pkce: true,
            persist_authorization: true,
        })
    }

    /// OAuth settings handed to the UI's `initOAuth`.
    fn oauth_config(&self) -> oauth::Config {
        oauth::Config::new()
            .client_id(&self.client_id)
            .scopes(self.scopes.clone())
            .use_pkce_with_authorization_code_grant(self.use_pkce)
    }

    /// Build the Swagger UI service serving `document`.
    pub fn into_swagger_ui(self, document: OpenApi) -> SwaggerUi {
        let config = Config::new([Url::new(self.display_name, self.document_url)])
            .persist_authorization(self.persist_authorization);

        tracing::info!(
            ui = SWAGGER_UI_PATH,
            document = self.document_url,
            scopes = ?self.scopes,
            "Swagger UI configured with OAuth2 PKCE"
        );

        SwaggerUi::new(SWAGGER_UI_PATH)
            .url(Url::new(self.display_name, self.document_url), document)
            .config(config)
            .oauth(self.oauth_config())
    }
}
