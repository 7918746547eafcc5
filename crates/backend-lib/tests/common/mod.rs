//! Test utilities for the HTTP API tests
//!
//! Builds a router over fresh state and drives it with `oneshot` requests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use backend_lib::{
    auth::{AccessTokenClaims, TokenIssuer},
    config::Settings,
    error::AppError,
    router::create_router,
    AppState,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use roomgate_common::TokenMetadata;
use serde_json::Value;
use sha2::Sha256;
use tower::ServiceExt;

pub const API_KEY: &str = "devkey";
pub const API_SECRET: &str = "devsecret";
pub const LIVEKIT_URL: &str = "wss://media.example.com";

/// Settings with test credentials
pub fn test_settings() -> Settings {
    Settings {
        livekit_url: LIVEKIT_URL.to_string(),
        livekit_api_key: Some(API_KEY.to_string()),
        livekit_api_secret: Some(API_SECRET.to_string()),
        ..Settings::default()
    }
}

/// Router and state issuing real signed tokens
pub fn setup_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(test_settings()));
    (create_router(Arc::clone(&state)), state)
}

/// Router and state whose token issuer always fails
pub fn setup_failing_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::with_issuer(test_settings(), Arc::new(FailingIssuer)));
    (create_router(Arc::clone(&state)), state)
}

/// Issuer standing in for misconfigured credentials
pub struct FailingIssuer;

#[async_trait]
impl TokenIssuer for FailingIssuer {
    async fn issue_token(
        &self,
        _room_name: &str,
        _identity: &str,
        _metadata: &TokenMetadata,
    ) -> Result<String, AppError> {
        Err(AppError::Upstream("invalid API credentials".to_string()))
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Send a request with an optional JSON body and decode the JSON response
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map_or_else(String::new, |v| v.to_string());
    send_raw(app, method, uri, &body).await
}

/// Send a request with a raw body labelled as JSON
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Verify a token's HS256 signature and decode its claims
pub fn decode_token(token: &str) -> AccessTokenClaims {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "token should have three segments");

    let header: Value = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[0]).unwrap()).unwrap();
    assert_eq!(header["alg"], "HS256");

    let signature = URL_SAFE_NO_PAD.decode(parts[2]).unwrap();
    Hmac::<Sha256>::new_from_slice(API_SECRET.as_bytes())
        .unwrap()
        .chain_update(format!("{}.{}", parts[0], parts[1]))
        .verify_slice(&signature)
        .expect("token signature should verify");

    serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap()
}

/// Decode the metadata embedded in a token
pub fn token_metadata(token: &str) -> TokenMetadata {
    serde_json::from_str(&decode_token(token).metadata).unwrap()
}
