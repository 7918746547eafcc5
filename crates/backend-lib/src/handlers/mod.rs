// ============================
// crates/backend-lib/src/handlers/mod.rs
// ============================
//! HTTP request handlers, one per endpoint.
use axum::extract::FromRequest;

use crate::error::AppError;

pub mod calls;
pub mod health;
pub mod rooms;

/// JSON body extractor whose rejections render as `{ "error": ... }`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
