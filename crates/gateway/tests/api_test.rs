//! Integration tests for the gateway router.
//!
//! The router is built exactly as `serve` builds it and driven in-process with
//! `tower::ServiceExt::oneshot`, so no socket or identity provider is needed.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{AppError, AuthOptions};
use gateway_lib::build_app;
use gateway_lib::config::GatewayConfig;

const AUTHORITY: &str = "https://id.example.com/realms/templateapp";
const SCOPE: &str = "templateapp-api";
const CLIENT_ID: &str = "templateapp-swagger";

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config(client_id: Option<&str>) -> GatewayConfig {
    GatewayConfig {
        auth: AuthOptions::new(AUTHORITY, SCOPE),
        swagger_client_id: client_id.map(str::to_string),
        ..Default::default()
    }
}

fn test_app() -> Router {
    build_app(test_config(Some(CLIENT_ID))).expect("app builds with a client id")
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Whether `script` contains the JSON `setting`, matching both pretty and
/// compact rendering of the key/value separator.
fn contains_setting(script: &str, setting: &str) -> bool {
    script.replace(": ", ":").contains(&setting.replace(": ", ":"))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).expect("response is JSON"))
}

// =============================================================================
// Startup Wiring
// =============================================================================

#[test]
fn test_build_fails_without_client_id() {
    let result = build_app(test_config(None));
    assert!(matches!(result, Err(AppError::Configuration(_))));
}

#[test]
fn test_build_fails_with_empty_client_id() {
    let result = build_app(test_config(Some("")));
    assert!(matches!(result, Err(AppError::Configuration(_))));
}

// =============================================================================
// OpenAPI Document
// =============================================================================

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, doc) = get_json(test_app(), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "TemplateApp API");
}

#[tokio::test]
async fn test_served_document_declares_oauth2_scheme() {
    let (_, doc) = get_json(test_app(), "/api-docs/openapi.json").await;

    let flow = &doc["components"]["securitySchemes"]["oauth2"]["flows"]["authorizationCode"];
    assert_eq!(
        flow["authorizationUrl"],
        "https://id.example.com/realms/templateapp/protocol/openid-connect/auth"
    );
    assert_eq!(
        flow["tokenUrl"],
        "https://id.example.com/realms/templateapp/protocol/openid-connect/token"
    );
    assert_eq!(
        flow["scopes"],
        json!({ "templateapp-api": "Access to TemplateApp protected endpoints" })
    );
}

#[tokio::test]
async fn test_served_document_secures_every_operation() {
    let (_, doc) = get_json(test_app(), "/api-docs/openapi.json").await;

    let paths = doc["paths"].as_object().expect("paths object");
    assert!(!paths.is_empty());

    for (path, item) in paths {
        for (method, operation) in item.as_object().expect("path item object") {
            assert_eq!(
                operation["security"],
                json!([{ "oauth2": [SCOPE] }]),
                "{} {} is not secured",
                method,
                path
            );
        }
    }
}

// =============================================================================
// Swagger UI
// =============================================================================

#[tokio::test]
async fn test_swagger_ui_is_configured_for_pkce() {
    let (status, script) = get(test_app(), "/swagger-ui/swagger-initializer.js").await;

    assert_eq!(status, StatusCode::OK);
    assert!(contains_setting(&script, r#""usePkceWithAuthorizationCodeGrant": true"#));
    assert!(contains_setting(&script, r#""persistAuthorization": true"#));
    assert!(contains_setting(&script, &format!(r#""clientId": "{}""#, CLIENT_ID)));
    assert!(script.contains(SCOPE));
}

#[tokio::test]
async fn test_swagger_ui_lists_document_by_display_name() {
    let (_, script) = get(test_app(), "/swagger-ui/swagger-initializer.js").await;

    assert!(contains_setting(&script, r#""name": "TemplateApp API""#));
    assert!(contains_setting(&script, r#""url": "/api-docs/openapi.json""#));
}

// =============================================================================
// Endpoints
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get_json(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "templateapp-gateway");
}

#[tokio::test]
async fn test_info_endpoint_reports_identity_provider() {
    let (status, body) = get_json(test_app(), "/api/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "TemplateApp API");
    assert_eq!(body["authority"], AUTHORITY);
    assert_eq!(body["scope"], SCOPE);
    assert!(body.get("client_id").is_none());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (status, body) = get_json(test_app(), "/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
