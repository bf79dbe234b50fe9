use serde::{Deserialize, Serialize};

/// `AuthKind` is the set of authentication schemes a target can declare.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AuthKind {
	/// Static key attached under a configured header name.
	#[serde(rename = "API Key")]
	ApiKey,
	/// `Authorization: Basic` from a stored username/password pair.
	Basic,
	/// Exchange call with basic credentials first, bearer token after.
	#[serde(rename = "Basic And Bearer")]
	BasicBearer,
	/// Static bearer token.
	Bearer,
	/// Grant-based token acquisition against a token endpoint.
	OAuth,
}

/// Serialization implementations
impl AuthKind {
	/// The stored `authentication_type` string for this kind.
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			AuthKind::ApiKey => "API Key",
			AuthKind::Basic => "Basic",
			AuthKind::BasicBearer => "Basic And Bearer",
			AuthKind::Bearer => "Bearer",
			AuthKind::OAuth => "OAuth",
		}
	}
}

/// From raw implementations
impl AuthKind {
	/// Match a stored `authentication_type` string.
	///
	/// Unrecognized strings are not an error here: the strategy factory treats
	/// them as "no scheme" and the request goes out untouched.
	#[must_use]
	pub fn from_raw(raw: &str) -> Option<Self> {
		match raw {
			"API Key" => Some(AuthKind::ApiKey),
			"Basic" => Some(AuthKind::Basic),
			"Basic And Bearer" => Some(AuthKind::BasicBearer),
			"Bearer" => Some(AuthKind::Bearer),
			"OAuth" => Some(AuthKind::OAuth),
			_ => None,
		}
	}
}

impl std::fmt::Display for AuthKind {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.write_str(self.as_str())
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_auth_kind_from_raw_ok() {
		// -- Exec & Check
		assert_eq!(AuthKind::from_raw("API Key"), Some(AuthKind::ApiKey));
		assert_eq!(AuthKind::from_raw("Basic And Bearer"), Some(AuthKind::BasicBearer));
		assert_eq!(AuthKind::from_raw("OAuth"), Some(AuthKind::OAuth));
		// Matching is exact; casing and spacing are part of the contract.
		assert_eq!(AuthKind::from_raw("api key"), None);
		assert_eq!(AuthKind::from_raw("Token"), None);
	}

	#[test]
	fn test_auth_kind_round_trip_ok() {
		// -- Exec & Check
		for kind in [
			AuthKind::ApiKey,
			AuthKind::Basic,
			AuthKind::BasicBearer,
			AuthKind::Bearer,
			AuthKind::OAuth,
		] {
			assert_eq!(AuthKind::from_raw(kind.as_str()), Some(kind));
		}
	}
}

// endregion: --- Tests
