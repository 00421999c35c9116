#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes;
use server::state::ServerState;

pub const ADMIN_EMAIL: &str = "admin@bookstore.test";
pub const ADMIN_PASSWORD: &str = "AdminPass123";

pub fn auth_cfg() -> configs::AuthConfig {
    configs::AuthConfig {
        jwt_secret: "test-secret-0123456789".into(),
        token_ttl_hours: 1,
        admin_email: None,
        admin_password: None,
    }
}

pub fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

/// Router over in-memory gateways with a bootstrapped administrator.
pub async fn build_app() -> Router {
    let state = ServerState::in_memory(&auth_cfg());
    state.auth.ensure_admin(ADMIN_EMAIL, ADMIN_PASSWORD).await.expect("bootstrap admin");
    routes::build_router(state, cors())
}

pub async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let req = match body {
        Some(b) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&b).expect("json body")))
            .expect("request"),
        None => req.body(Body::empty()).expect("request"),
    };
    let resp = app.clone().oneshot(req).await.expect("router is infallible");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, value)
}

pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(app, "POST", "/auth/login", None, Some(json!({"email": email, "password": password}))).await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().expect("token").to_string()
}

pub async fn admin_token(app: &Router) -> String { login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await }

/// Register a fresh reader and return its token.
pub async fn user_token(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/register",
        None,
        Some(json!({
            "email": email,
            "password": "Passw0rd!",
            "repeat_password": "Passw0rd!",
            "first_name": "Ada",
            "last_name": "Reader",
            "shipping_address": "1 Main St"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    login(app, email, "Passw0rd!").await
}

pub fn dune() -> Value {
    json!({"title": "Dune", "author": "Herbert", "isbn": "123", "price": "9.99"})
}
