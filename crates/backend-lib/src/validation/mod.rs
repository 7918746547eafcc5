// ============================
// crates/backend-lib/src/validation/mod.rs
// ============================
//! Request validation.
//!
//! Only presence is checked: identifiers are passed through without any
//! format validation. An empty string counts as absent.

use crate::error::AppError;

/// Treat empty strings as absent
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Require a single field, failing with `message` when absent
pub fn require(value: Option<String>, message: &str) -> Result<String, AppError> {
    present(value).ok_or_else(|| AppError::Validation(message.to_string()))
}

/// Require two fields together, failing with `message` when either is absent
pub fn require_pair(
    first: Option<String>,
    second: Option<String>,
    message: &str,
) -> Result<(String, String), AppError> {
    match (present(first), present(second)) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(AppError::Validation(message.to_string())),
    }
}
