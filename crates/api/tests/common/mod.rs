#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use commons_api::auth::jwt::{generate_access_token, JwtConfig};
use commons_api::config::ServerConfig;
use commons_api::router::build_app_router;
use commons_api::state::AppState;
use commons_core::factories::{self, ResearchOverrides, TutorialOverrides};
use commons_core::models::{Research, Tutorial};
use commons_core::moderation::Moderation;
use commons_db::{MemoryStore, SharedStore, StoreConfig};
use http_body_util::BodyExt;
use tower::ServiceExt;

const TEST_SECRET: &str = "test-secret-for-integration-tests";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
        store: StoreConfig::default(),
    }
}

/// Documents every test app starts with.
pub fn seed_howtos() -> Vec<Tutorial> {
    vec![
        factories::tutorial(TutorialOverrides {
            id: Some("howto-1".into()),
            title: Some("Sheet Press".into()),
            ..Default::default()
        }),
        factories::tutorial(TutorialOverrides {
            id: Some("howto-2".into()),
            title: Some("Injection Mould".into()),
            ..Default::default()
        }),
    ]
}

pub fn seed_research() -> Vec<Research> {
    vec![
        factories::research(ResearchOverrides {
            id: Some("research-1".into()),
            title: Some("Bottle caps".into()),
            description: Some("Melting caps into tiles".into()),
            moderation: Some(Moderation::Accepted),
            ..Default::default()
        }),
        factories::research(ResearchOverrides {
            id: Some("research-2".into()),
            title: Some("Brick press".into()),
            moderation: Some(Moderation::Draft),
            ..Default::default()
        }),
    ]
}

/// Build the full application router over a seeded in-memory store.
///
/// Uses the same [`build_app_router`] as `main.rs` so integration tests
/// exercise the production middleware stack.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::with_documents(
        seed_howtos(),
        seed_research(),
    )))
}

pub fn build_test_app_with(store: SharedStore) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// A valid bearer token for the test JWT secret.
pub fn token() -> String {
    generate_access_token("user-1", "Test Maker", &test_config().jwt)
        .expect("token generation should succeed")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
