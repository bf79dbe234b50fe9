//! Shared helpers for the scheme implementations.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD as BASE64_STANDARD, URL_SAFE_NO_PAD as BASE64_URL_NO_PAD};
use serde_json::Value;
use sha2::{Digest, Sha256};

pub(in crate::auth) const AUTHORIZATION_HEADER: &str = "Authorization";

pub(in crate::auth) fn basic_header_value(username: &str, password: &str) -> String {
	format!("Basic {}", BASE64_STANDARD.encode(format!("{username}:{password}")))
}

pub(in crate::auth) fn bearer_header_value(token: &str) -> String {
	format!("Bearer {token}")
}

/// Extracted token values are usually strings; anything else goes out in its
/// JSON rendering.
pub(in crate::auth) fn token_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// RFC 7636 S256: base64url (no padding) of the verifier's SHA-256.
pub(in crate::auth) fn s256_challenge(verifier: &str) -> String {
	BASE64_URL_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

// region:    --- Tests


// endregion: --- Tests
