use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::base64::Base64;
use serde_with::serde_as;

/// One registered API target, column for column as the storage layer holds it.
///
/// Credential columns (`Vec<u8>`) hold the UTF-8 bytes of a base64 AES-256-CBC
/// ciphertext and serialize as base64 text. Nullable columns are `Option`;
/// `method_type`, `response_type` and `url` are required at rest but can still
/// be removed per invocation by an explicit null override.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDescriptor {
	pub id: i64,
	pub name: String,
	#[serde(default)]
	pub group_name: Option<String>,
	#[serde(default)]
	pub authentication_type: Option<String>,
	#[serde(default)]
	pub basic_and_bearer_authentication_method_type: Option<String>,
	#[serde(default)]
	pub oauth_authentication_grant_type: Option<String>,
	pub method_type: String,
	pub response_type: String,
	#[serde_as(as = "Option<Base64>")]
	#[serde(default)]
	pub api_key_authentication_key: Option<Vec<u8>>,
	#[serde(default)]
	pub api_key_authentication_header_name: Option<String>,
	#[serde_as(as = "Option<Base64>")]
	#[serde(default)]
	pub basic_authentication_username: Option<Vec<u8>>,
	#[serde_as(as = "Option<Base64>")]
	#[serde(default)]
	pub basic_authentication_password: Option<Vec<u8>>,
	#[serde(default)]
	pub basic_and_bearer_authentication_url: Option<String>,
	#[serde(default)]
	pub basic_and_bearer_authentication_query_parameter_map: Option<Value>,
	#[serde(default)]
	pub basic_and_bearer_authentication_header_map: Option<Value>,
	#[serde(default)]
	pub basic_and_bearer_authentication_body: Option<Value>,
	#[serde(default)]
	pub basic_and_bearer_authentication_token_extractor_list: Option<Vec<String>>,
	#[serde(default)]
	pub basic_and_bearer_authentication_expiration_extractor_list: Option<Vec<String>>,
	#[serde(default)]
	pub basic_and_bearer_authentication_expiration_buffer: Option<i64>,
	#[serde_as(as = "Option<Base64>")]
	#[serde(default)]
	pub bearer_authentication_token: Option<Vec<u8>>,
	#[serde_as(as = "Option<Base64>")]
	#[serde(default)]
	pub oauth_authentication_client_id: Option<Vec<u8>>,
	#[serde_as(as = "Option<Base64>")]
	#[serde(default)]
	pub oauth_authentication_client_secret: Option<Vec<u8>>,
	#[serde(default)]
	pub oauth_authentication_token_url: Option<String>,
	#[serde(default)]
	pub oauth_authentication_authorization_url: Option<String>,
	#[serde(default)]
	pub oauth_authentication_redirect_url: Option<String>,
	#[serde(default)]
	pub oauth_authentication_scope: Option<String>,
	#[serde(default)]
	pub oauth_authentication_access_token_extractor_list: Option<Vec<String>>,
	#[serde(default)]
	pub oauth_authentication_refresh_token_extractor_list: Option<Vec<String>>,
	#[serde(default)]
	pub oauth_authentication_expiration_extractor_list: Option<Vec<String>>,
	#[serde(default)]
	pub oauth_authentication_expiration_buffer: Option<i64>,
	#[serde(default)]
	pub oauth_authentication_pkce_enabled: Option<bool>,
	#[serde(default)]
	pub oauth_authentication_additional_parameter_map: Option<Value>,
	pub url: String,
	#[serde(default)]
	pub query_parameter_map: Option<Value>,
	#[serde(default)]
	pub header_map: Option<Value>,
	#[serde(default)]
	pub body: Option<Value>,
	pub is_api_active: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// Constructors
impl TargetDescriptor {
	/// A minimal descriptor with every nullable column unset.
	pub fn new(id: i64, name: impl Into<String>, method_type: impl Into<String>, url: impl Into<String>) -> Self {
		let now = Utc::now();
		Self {
			id,
			name: name.into(),
			group_name: None,
			authentication_type: None,
			basic_and_bearer_authentication_method_type: None,
			oauth_authentication_grant_type: None,
			method_type: method_type.into(),
			response_type: "json".to_string(),
			api_key_authentication_key: None,
			api_key_authentication_header_name: None,
			basic_authentication_username: None,
			basic_authentication_password: None,
			basic_and_bearer_authentication_url: None,
			basic_and_bearer_authentication_query_parameter_map: None,
			basic_and_bearer_authentication_header_map: None,
			basic_and_bearer_authentication_body: None,
			basic_and_bearer_authentication_token_extractor_list: None,
			basic_and_bearer_authentication_expiration_extractor_list: None,
			basic_and_bearer_authentication_expiration_buffer: None,
			bearer_authentication_token: None,
			oauth_authentication_client_id: None,
			oauth_authentication_client_secret: None,
			oauth_authentication_token_url: None,
			oauth_authentication_authorization_url: None,
			oauth_authentication_redirect_url: None,
			oauth_authentication_scope: None,
			oauth_authentication_access_token_extractor_list: None,
			oauth_authentication_refresh_token_extractor_list: None,
			oauth_authentication_expiration_extractor_list: None,
			oauth_authentication_expiration_buffer: None,
			oauth_authentication_pkce_enabled: None,
			oauth_authentication_additional_parameter_map: None,
			url: url.into(),
			query_parameter_map: None,
			header_map: None,
			body: None,
			is_api_active: true,
			created_at: now,
			updated_at: now,
		}
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

	use super::*;

	#[test]
	fn test_descriptor_deserialize_sparse_ok() -> Result<()> {
		// -- Setup & Fixtures
		let json = r#"{
			"id": 7,
			"name": "billing",
			"method_type": "get",
			"response_type": "json",
			"bearer_authentication_token": "Y2lwaGVydGV4dA==",
			"url": "https://billing.internal/v1/summary",
			"is_api_active": true,
			"created_at": "2024-03-01T10:00:00Z",
			"updated_at": "2024-03-02T10:00:00Z"
		}"#;

		// -- Exec
		let descriptor: TargetDescriptor = serde_json::from_str(json)?;

		// -- Check
		assert_eq!(descriptor.name, "billing");
		assert_eq!(descriptor.bearer_authentication_token.as_deref(), Some(b"ciphertext".as_slice()));
		assert!(descriptor.authentication_type.is_none());
		assert!(descriptor.query_parameter_map.is_none());

		Ok(())
	}
}

// endregion: --- Tests
