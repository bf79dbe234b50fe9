use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::rust::double_option;

/// One tier of field overrides, keyed by storage column name on the wire.
///
/// Every field is tri-state: absent (`None`, the tier does not touch the
/// field), explicit null (`Some(None)`, the field resolves to no value), or a
/// replacement (`Some(Some(v))`). Credential overrides are plaintext strings;
/// they bypass the vault entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetOverrides {
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub authentication_type: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_and_bearer_authentication_method_type: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_grant_type: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub method_type: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub response_type: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub api_key_authentication_key: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub api_key_authentication_header_name: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_authentication_username: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_authentication_password: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_and_bearer_authentication_url: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_and_bearer_authentication_query_parameter_map: Option<Option<Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_and_bearer_authentication_header_map: Option<Option<Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_and_bearer_authentication_body: Option<Option<Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_and_bearer_authentication_token_extractor_list: Option<Option<Vec<String>>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_and_bearer_authentication_expiration_extractor_list: Option<Option<Vec<String>>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub basic_and_bearer_authentication_expiration_buffer: Option<Option<i64>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub bearer_authentication_token: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_client_id: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_client_secret: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_token_url: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_authorization_url: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_redirect_url: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_scope: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_access_token_extractor_list: Option<Option<Vec<String>>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_refresh_token_extractor_list: Option<Option<Vec<String>>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_expiration_extractor_list: Option<Option<Vec<String>>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_expiration_buffer: Option<Option<i64>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_pkce_enabled: Option<Option<bool>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub oauth_authentication_additional_parameter_map: Option<Option<Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub url: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub query_parameter_map: Option<Option<Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub header_map: Option<Option<Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
	pub body: Option<Option<Value>>,
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

	use super::*;
	use serde_json::json;

	#[test]
	fn test_overrides_tri_state_deserialize_ok() -> Result<()> {
		// -- Setup & Fixtures
		let json = json!({
			"url": "https://staging.example.test/v2",
			"authentication_type": null
		});

		// -- Exec
		let overrides: TargetOverrides = serde_json::from_value(json)?;

		// -- Check
		// Present value, explicit null, and absent are three distinct states.
		assert_eq!(overrides.url, Some(Some("https://staging.example.test/v2".to_string())));
		assert_eq!(overrides.authentication_type, Some(None));
		assert_eq!(overrides.method_type, None);

		Ok(())
	}

	#[test]
	fn test_overrides_serialize_skips_absent_ok() -> Result<()> {
		// -- Setup & Fixtures
		let overrides = TargetOverrides {
			bearer_authentication_token: Some(Some("plain-tok".to_string())),
			header_map: Some(None),
			..Default::default()
		};

		// -- Exec
		let value = serde_json::to_value(&overrides)?;

		// -- Check
		assert_eq!(value, json!({"bearer_authentication_token": "plain-tok", "header_map": null}));

		Ok(())
	}
}

// endregion: --- Tests
