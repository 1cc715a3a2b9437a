//! OpenAPI documentation.
//!
//! [`ApiDoc`] is derived from the handlers. Before it is served, the document
//! passes through [`OAuth2Addon`], which declares the identity provider's
//! authorization-code flow and requires it on every operation so that
//! Swagger UI can log in with PKCE and attach bearer tokens.

use common::AuthOptions;
use utoipa::{
    openapi::{
        self,
        security::{AuthorizationCode, Flow, OAuth2, Scopes, SecurityRequirement, SecurityScheme},
    },
    Modify, OpenApi,
};

use crate::handlers::health_handler::{self, HealthResponse};
use crate::handlers::info_handler::{self, AppInfoResponse};

/// Product title shown in the document and in Swagger UI.
pub const API_TITLE: &str = "TemplateApp API";

/// Name of the security scheme inserted into the document.
pub const OAUTH2_SCHEME: &str = "oauth2";

/// Description attached to the configured API scope.
pub const SCOPE_DESCRIPTION: &str = "Access to TemplateApp protected endpoints";

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TemplateApp API",
        version = "0.1.0",
        description = "TemplateApp HTTP API. Use the Authorize button to sign in with the identity provider."
    ),
    paths(
        health_handler::health_check,
        info_handler::app_info,
    ),
    components(
        schemas(
            HealthResponse,
            AppInfoResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health endpoints"),
        (name = "Application", description = "Application metadata"),
    )
)]
pub struct ApiDoc;

/// Generate the served document: the derived [`ApiDoc`] run through every
/// registered modifier.
pub fn generate_document(options: &AuthOptions) -> openapi::OpenApi {
    let mut document = ApiDoc::openapi();
    OAuth2Addon::new(options.clone()).modify(&mut document);
    document
}

/// Adds the OAuth2 authorization-code scheme and secures every operation with it.
///
/// Running the addon more than once on the same document is idempotent: the
/// scheme is replaced and a requirement is only added to operations that do
/// not already carry an identical one.
#[derive(Debug, Clone)]
pub struct OAuth2Addon {
    options: AuthOptions,
}

impl OAuth2Addon {
    pub fn new(options: AuthOptions) -> Self {
        Self { options }
    }

    fn security_scheme(&self) -> SecurityScheme {
        let flow = AuthorizationCode::new(
            self.options.authorization_url(),
            self.options.token_url(),
            Scopes::one(self.options.api_scope.as_str(), SCOPE_DESCRIPTION),
        );

        SecurityScheme::OAuth2(OAuth2::new([Flow::AuthorizationCode(flow)]))
    }

    fn security_requirement(&self) -> SecurityRequirement {
        SecurityRequirement::new(OAUTH2_SCHEME, [self.options.api_scope.as_str()])
    }
}

impl Modify for OAuth2Addon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        openapi.info.title = API_TITLE.to_string();

        openapi
            .components
            .get_or_insert_with(Default::default)
            .add_security_scheme(OAUTH2_SCHEME, self.security_scheme());

        let requirement = self.security_requirement();
        let mut secured = 0usize;

        for path_item in openapi.paths.paths.values_mut() {
            for operation in path_item.operations.values_mut() {
                let security = operation.security.get_or_insert_with(Vec::new);
                if !security.contains(&requirement) {
                    security.push(requirement.clone());
                }
                secured += 1;
            }
        }

        tracing::debug!(
            scheme = OAUTH2_SCHEME,
            operations = secured,
            "Applied OAuth2 security to OpenAPI document"
        );
    }
}
