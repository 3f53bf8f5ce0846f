//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full application router with the same middleware stack as
//! `main.rs` and drives it with `tower::ServiceExt::oneshot`, so tests
//! exercise exactly what production serves.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use bookstack_api::auth::jwt::JwtConfig;
use bookstack_api::config::ServerConfig;
use bookstack_api::routes;
use bookstack_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

fn with_bearer(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

/// Send a GET request without credentials.
pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response {
    let request = with_bearer(Request::builder().method(Method::GET).uri(uri), Some(token))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a POST request with a JSON body, without credentials.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(app: &Router, uri: &str, body: Value, token: &str) -> Response {
    let request = with_bearer(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json"),
        Some(token),
    )
    .body(Body::from(body.to_string()))
    .unwrap();
    send(app, request).await
}

/// Send a POST request with a raw (possibly malformed) body and a bearer
/// token, declared as JSON.
pub async fn post_raw_auth(app: &Router, uri: &str, body: &str, token: &str) -> Response {
    let request = with_bearer(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json"),
        Some(token),
    )
    .body(Body::from(body.to_string()))
    .unwrap();
    send(app, request).await
}

/// Send a PUT request with a JSON body and a bearer token.
pub async fn put_json_auth(app: &Router, uri: &str, body: Value, token: &str) -> Response {
    let request = with_bearer(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json"),
        Some(token),
    )
    .body(Body::from(body.to_string()))
    .unwrap();
    send(app, request).await
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response {
    let request = with_bearer(
        Request::builder().method(Method::DELETE).uri(uri),
        Some(token),
    )
    .body(Body::empty())
    .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Register a fresh user and log in, returning a bearer token.
pub async fn auth_token(app: &Router) -> String {
    let credentials = json!({
        "email": "reader@example.com",
        "password": "nhtpn99@Z",
    });

    let response = post_json(app, "/api/v1/auth/register", credentials.clone()).await;
    assert_eq!(response.status(), StatusCode::OK, "registration should succeed");

    let response = post_json(app, "/api/v1/auth/login", credentials).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");

    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response should carry a token")
        .to_string()
}

/// Create a book through the API and return its id from a follow-up listing.
pub async fn create_book(
    app: &Router,
    token: &str,
    title: &str,
    year: &str,
    author: &str,
    publisher: &str,
) -> i32 {
    let response = post_json_auth(
        app,
        "/api/v1/books",
        json!({
            "title": title,
            "year": year,
            "author": author,
            "publisher": publisher,
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "creation should succeed");

    // Creation returns a message, not the entity; recover the id by listing.
    let response = get_auth(app, "/api/v1/books", token).await;
    let json = body_json(response).await;
    json.as_array()
        .expect("listing should be an array")
        .iter()
        .find(|b| b["title"] == title && b["author"] == author)
        .and_then(|b| b["id"].as_i64())
        .expect("created book should appear in the listing") as i32
}
