use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

/// Extracted expirations below this are lifetimes in seconds; at or above it,
/// absolute Unix timestamps.
const EPOCH_FLOOR_SECS: i64 = 1_000_000_000;

// region:    --- TokenState

/// An acquired bearer credential with its lifecycle metadata.
///
/// Held by a strategy instance for the duration of one invocation.
#[derive(Clone)]
pub struct TokenState {
	pub access_token: String,
	pub refresh_token: Option<String>,
	/// Absent when the provider gave no usable expiration: the token then
	/// never goes stale within the invocation.
	pub expires_at: Option<DateTime<Utc>>,
}

impl TokenState {
	/// True when the token is within `buffer_secs` of its expiry, or past it.
	#[must_use]
	pub fn is_expired(&self, buffer_secs: i64, now: DateTime<Utc>) -> bool {
		match self.expires_at {
			Some(expires_at) => expires_at <= now + Duration::seconds(buffer_secs),
			None => false,
		}
	}
}

// Token material never goes to logs.
impl std::fmt::Debug for TokenState {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("TokenState")
			.field("access_token", &"REDACTED")
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "REDACTED"))
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

// endregion: --- TokenState

// region:    --- Expiry Normalization

/// Turn an extracted expiration value into an absolute expiry instant.
///
/// Numbers and numeric strings are interpreted against the epoch floor;
/// everything else means no expiration is tracked.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn expiry_from_value(value: &Value, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
	let secs = match value {
		Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
		Value::String(s) => s.trim().parse::<i64>().ok()?,
		_ => return None,
	};

	if secs >= EPOCH_FLOOR_SECS {
		DateTime::<Utc>::from_timestamp(secs, 0)
	} else {
		Some(now + Duration::seconds(secs))
	}
}

// endregion: --- Expiry Normalization

// region:    --- Tests


// endregion: --- Tests
