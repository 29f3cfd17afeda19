//! Shared helpers for API integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use boilergen_api::auth::jwt::{generate_access_token, JwtConfig};
use boilergen_api::config::{GeneratorConfig, RateLimitConfig, ServerConfig};
use boilergen_api::router::build_app_router;
use boilergen_api::state::AppState;
use boilergen_generator::GeneratorClient;

/// JWT settings shared by the test app and the token-minting helper.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults and the given generator
/// endpoint.
///
/// Generator retries are disabled so transport-failure tests return fast.
pub fn test_config(generator_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
        generator: GeneratorConfig {
            url: generator_url.to_string(),
            timeout_secs: 5,
            retries: 0,
        },
        rate_limit: RateLimitConfig {
            max_generations: 3,
            window_hours: 24,
        },
        delete_cooldown_hours: 24,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and generator endpoint.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool, generator_url: &str) -> Router {
    let config = test_config(generator_url);
    let generator = GeneratorClient::new(
        config.generator.url.clone(),
        Duration::from_secs(config.generator.timeout_secs),
        config.generator.retries,
    )
    .expect("test generator client should build");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator: Arc::new(generator),
    };

    build_app_router(state, &config)
}

/// A generator endpoint that nothing listens on (connection refused).
pub const UNREACHABLE_GENERATOR: &str = "http://127.0.0.1:1/";

/// Spawn a throwaway generator service answering every POST with the given
/// status and JSON body. Returns its URL.
pub async fn spawn_generator(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("mock generator should bind");
    let addr = listener.local_addr().expect("mock generator addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock generator");
    });

    format!("http://{addr}/")
}

/// Mint a `Bearer ...` header value for the given user.
pub fn bearer(user_id: &str) -> String {
    let token =
        generate_access_token(user_id, &test_jwt_config()).expect("test token should sign");
    format!("Bearer {token}")
}

/// Issue a GET without credentials.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Issue a request with optional bearer auth and optional JSON body.
pub async fn request(
    app: Router,
    method: &str,
    path: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.oneshot(request).await.expect("request should complete")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
