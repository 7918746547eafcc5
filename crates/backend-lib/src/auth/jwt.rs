// ============================
// crates/backend-lib/src/auth/jwt.rs
// ============================
//! HS256 JSON Web Token signing.
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Pre-encoded `{"alg":"HS256","typ":"JWT"}` header
const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Sign `claims` with `secret`, returning a compact `header.payload.signature` token
pub fn sign_hs256<T: Serialize>(claims: &T, secret: &str) -> Result<String, AppError> {
    let header = URL_SAFE_NO_PAD.encode(HEADER);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
    let signing_input = format!("{header}.{payload}");

    let digest = mac(secret)?.chain_update(&signing_input).finalize();
    let signature = URL_SAFE_NO_PAD.encode(digest.into_bytes());

    Ok(format!("{signing_input}.{signature}"))
}

/// Verify a token signed by [`sign_hs256`] and decode its claims.
///
/// Only the signature is checked; `nbf`/`exp` are left to the consumer.
#[cfg(test)]
pub(crate) fn verify_hs256<T: serde::de::DeserializeOwned>(
    token: &str,
    secret: &str,
) -> Result<T, AppError> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AppError::Validation("malformed token".to_string()));
    };

    let header_json = decode_segment(header)?;
    if header_json != HEADER.as_bytes() {
        return Err(AppError::Validation("unsupported token header".to_string()));
    }

    let signature = decode_segment(signature)?;
    mac(secret)?
        .chain_update(format!("{header}.{payload}"))
        .verify_slice(&signature)
        .map_err(|_| AppError::Validation("invalid token signature".to_string()))?;

    Ok(serde_json::from_slice(&decode_segment(payload)?)?)
}

fn mac(secret: &str) -> Result<HmacSha256, AppError> {
    HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::Upstream(format!("invalid signing key: {e}")))
}

#[cfg(test)]
fn decode_segment(segment: &str) -> Result<Vec<u8>, AppError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| AppError::Validation(format!("malformed token segment: {e}")))
}
