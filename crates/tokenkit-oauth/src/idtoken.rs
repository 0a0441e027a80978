//! Unverified decoding of OpenID Connect ID tokens.
//!
//! This is a debug/inspection utility only: the signature segment is
//! ignored entirely, so decoded claims MUST NOT be used for trust
//! decisions.

use base64::{
    Engine,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use serde_json::{Map, Value};

use crate::error::{OAuthError, Result};

/// Decode the claims of a compact JWT **without verifying its signature**.
///
/// Splits the token on `.`, requires exactly three segments, base64url-
/// decodes the payload segment (unpadded, with a padded fallback), and
/// parses it as a JSON object.
pub fn decode_claims_unverified(jwt: &str) -> Result<Map<String, Value>> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(OAuthError::InvalidIdToken(format!(
            "expected 3 segments, got {}",
            parts.len()
        )));
    }

    let payload = URL_SAFE_NO_PAD
        .decode(parts[1])
        .or_else(|_| URL_SAFE.decode(parts[1]))
        .map_err(|e| OAuthError::InvalidIdToken(format!("payload is not base64url: {e}")))?;

    let value: Value = serde_json::from_slice(&payload)
        .map_err(|e| OAuthError::InvalidIdToken(format!("payload is not JSON: {e}")))?;

    match value {
        Value::Object(claims) => Ok(claims),
        other => Err(OAuthError::InvalidIdToken(format!(
            "payload is not a JSON object: {other}"
        ))),
    }
}
