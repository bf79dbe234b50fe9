use crate::resolver::TargetOverrides;
use crate::target::{CredentialSource, TargetDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// The resolved value set for one target, one invocation.
///
/// This is the only view the strategy factory and the request builder see;
/// neither of them goes back to the descriptor. Serializes with the
/// camel-cased key set the aggregation records echo (`oAuth…` prefix for the
/// OAuth fields). Credential fields keep their source form — ciphertext stays
/// ciphertext until strategy construction.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectiveParams {
	pub authentication_type: Option<String>,
	pub basic_and_bearer_authentication_method_type: Option<String>,
	#[serde(rename = "oAuthAuthenticationGrantType")]
	pub oauth_authentication_grant_type: Option<String>,
	pub method_type: Option<String>,
	pub response_type: Option<String>,
	pub api_key_authentication_key: Option<CredentialSource>,
	pub api_key_authentication_header_name: Option<String>,
	pub basic_authentication_username: Option<CredentialSource>,
	pub basic_authentication_password: Option<CredentialSource>,
	pub basic_and_bearer_authentication_url: Option<String>,
	pub basic_and_bearer_authentication_query_parameter_map: Option<Value>,
	pub basic_and_bearer_authentication_header_map: Option<Value>,
	pub basic_and_bearer_authentication_body: Option<Value>,
	pub basic_and_bearer_authentication_token_extractor_list: Option<Vec<String>>,
	pub basic_and_bearer_authentication_expiration_extractor_list: Option<Vec<String>>,
	pub basic_and_bearer_authentication_expiration_buffer: Option<i64>,
	pub bearer_authentication_token: Option<CredentialSource>,
	#[serde(rename = "oAuthAuthenticationClientId")]
	pub oauth_authentication_client_id: Option<CredentialSource>,
	#[serde(rename = "oAuthAuthenticationClientSecret")]
	pub oauth_authentication_client_secret: Option<CredentialSource>,
	#[serde(rename = "oAuthAuthenticationTokenUrl")]
	pub oauth_authentication_token_url: Option<String>,
	#[serde(rename = "oAuthAuthenticationAuthorizationUrl")]
	pub oauth_authentication_authorization_url: Option<String>,
	#[serde(rename = "oAuthAuthenticationRedirectUrl")]
	pub oauth_authentication_redirect_url: Option<String>,
	#[serde(rename = "oAuthAuthenticationScope")]
	pub oauth_authentication_scope: Option<String>,
	#[serde(rename = "oAuthAuthenticationAccessTokenExtractorList")]
	pub oauth_authentication_access_token_extractor_list: Option<Vec<String>>,
	#[serde(rename = "oAuthAuthenticationRefreshTokenExtractorList")]
	pub oauth_authentication_refresh_token_extractor_list: Option<Vec<String>>,
	#[serde(rename = "oAuthAuthenticationExpirationExtractorList")]
	pub oauth_authentication_expiration_extractor_list: Option<Vec<String>>,
	#[serde(rename = "oAuthAuthenticationExpirationBuffer")]
	pub oauth_authentication_expiration_buffer: Option<i64>,
	#[serde(rename = "oAuthAuthenticationPkceEnabled")]
	pub oauth_authentication_pkce_enabled: Option<bool>,
	#[serde(rename = "oAuthAuthenticationAdditionalParameterMap")]
	pub oauth_authentication_additional_parameter_map: Option<Value>,
	pub url: Option<String>,
	pub query_parameter_map: Option<Value>,
	pub header_map: Option<Value>,
	pub body: Option<Value>,
}

/// Resolver
impl EffectiveParams {
	/// Resolve every field of one target through the override hierarchy.
	///
	/// Stored credential columns become `CredentialSource::Encrypted`;
	/// override-supplied credentials become `CredentialSource::Plain`.
	#[must_use]
	pub fn resolve(
		descriptor: &TargetDescriptor,
		global: Option<&TargetOverrides>,
		local: Option<&TargetOverrides>,
	) -> Self {
		let d = descriptor;
		let t = ParamTiers { global, local };

		Self {
			authentication_type: t.pick(|o| &o.authentication_type, d.authentication_type.as_ref()),
			basic_and_bearer_authentication_method_type: t.pick(
				|o| &o.basic_and_bearer_authentication_method_type,
				d.basic_and_bearer_authentication_method_type.as_ref(),
			),
			oauth_authentication_grant_type: t.pick(
				|o| &o.oauth_authentication_grant_type,
				d.oauth_authentication_grant_type.as_ref(),
			),
			method_type: t.pick(|o| &o.method_type, Some(&d.method_type)),
			response_type: t.pick(|o| &o.response_type, Some(&d.response_type)),
			api_key_authentication_key: t.pick_credential(
				|o| &o.api_key_authentication_key,
				d.api_key_authentication_key.as_ref(),
			),
			api_key_authentication_header_name: t.pick(
				|o| &o.api_key_authentication_header_name,
				d.api_key_authentication_header_name.as_ref(),
			),
			basic_authentication_username: t.pick_credential(
				|o| &o.basic_authentication_username,
				d.basic_authentication_username.as_ref(),
			),
			basic_authentication_password: t.pick_credential(
				|o| &o.basic_authentication_password,
				d.basic_authentication_password.as_ref(),
			),
			basic_and_bearer_authentication_url: t.pick(
				|o| &o.basic_and_bearer_authentication_url,
				d.basic_and_bearer_authentication_url.as_ref(),
			),
			basic_and_bearer_authentication_query_parameter_map: t.pick(
				|o| &o.basic_and_bearer_authentication_query_parameter_map,
				d.basic_and_bearer_authentication_query_parameter_map.as_ref(),
			),
			basic_and_bearer_authentication_header_map: t.pick(
				|o| &o.basic_and_bearer_authentication_header_map,
				d.basic_and_bearer_authentication_header_map.as_ref(),
			),
			basic_and_bearer_authentication_body: t.pick(
				|o| &o.basic_and_bearer_authentication_body,
				d.basic_and_bearer_authentication_body.as_ref(),
			),
			basic_and_bearer_authentication_token_extractor_list: t.pick(
				|o| &o.basic_and_bearer_authentication_token_extractor_list,
				d.basic_and_bearer_authentication_token_extractor_list.as_ref(),
			),
			basic_and_bearer_authentication_expiration_extractor_list: t.pick(
				|o| &o.basic_and_bearer_authentication_expiration_extractor_list,
				d.basic_and_bearer_authentication_expiration_extractor_list.as_ref(),
			),
			basic_and_bearer_authentication_expiration_buffer: t.pick(
				|o| &o.basic_and_bearer_authentication_expiration_buffer,
				d.basic_and_bearer_authentication_expiration_buffer.as_ref(),
			),
			bearer_authentication_token: t.pick_credential(
				|o| &o.bearer_authentication_token,
				d.bearer_authentication_token.as_ref(),
			),
			oauth_authentication_client_id: t.pick_credential(
				|o| &o.oauth_authentication_client_id,
				d.oauth_authentication_client_id.as_ref(),
			),
			oauth_authentication_client_secret: t.pick_credential(
				|o| &o.oauth_authentication_client_secret,
				d.oauth_authentication_client_secret.as_ref(),
			),
			oauth_authentication_token_url: t.pick(
				|o| &o.oauth_authentication_token_url,
				d.oauth_authentication_token_url.as_ref(),
			),
			oauth_authentication_authorization_url: t.pick(
				|o| &o.oauth_authentication_authorization_url,
				d.oauth_authentication_authorization_url.as_ref(),
			),
			oauth_authentication_redirect_url: t.pick(
				|o| &o.oauth_authentication_redirect_url,
				d.oauth_authentication_redirect_url.as_ref(),
			),
			oauth_authentication_scope: t.pick(|o| &o.oauth_authentication_scope, d.oauth_authentication_scope.as_ref()),
			oauth_authentication_access_token_extractor_list: t.pick(
				|o| &o.oauth_authentication_access_token_extractor_list,
				d.oauth_authentication_access_token_extractor_list.as_ref(),
			),
			oauth_authentication_refresh_token_extractor_list: t.pick(
				|o| &o.oauth_authentication_refresh_token_extractor_list,
				d.oauth_authentication_refresh_token_extractor_list.as_ref(),
			),
			oauth_authentication_expiration_extractor_list: t.pick(
				|o| &o.oauth_authentication_expiration_extractor_list,
				d.oauth_authentication_expiration_extractor_list.as_ref(),
			),
			oauth_authentication_expiration_buffer: t.pick(
				|o| &o.oauth_authentication_expiration_buffer,
				d.oauth_authentication_expiration_buffer.as_ref(),
			),
			oauth_authentication_pkce_enabled: t.pick(
				|o| &o.oauth_authentication_pkce_enabled,
				d.oauth_authentication_pkce_enabled.as_ref(),
			),
			oauth_authentication_additional_parameter_map: t.pick(
				|o| &o.oauth_authentication_additional_parameter_map,
				d.oauth_authentication_additional_parameter_map.as_ref(),
			),
			url: t.pick(|o| &o.url, Some(&d.url)),
			query_parameter_map: t.pick(|o| &o.query_parameter_map, d.query_parameter_map.as_ref()),
			header_map: t.pick(|o| &o.header_map, d.header_map.as_ref()),
			body: t.pick(|o| &o.body, d.body.as_ref()),
		}
	}
}

// region:    --- ParamTiers

/// Borrowing view over the two override tiers of one resolution.
struct ParamTiers<'a> {
	global: Option<&'a TargetOverrides>,
	local: Option<&'a TargetOverrides>,
}

impl ParamTiers<'_> {
	/// First defined tier wins; `Some(None)` (explicit null) is defined.
	fn pick<T: Clone>(&self, field: fn(&TargetOverrides) -> &Option<Option<T>>, stored: Option<&T>) -> Option<T> {
		for tier in [self.global, self.local] {
			if let Some(Some(value)) = tier.map(field) {
				return value.clone();
			}
		}
		stored.cloned()
	}

	/// Same hierarchy for credential columns; the winning tier decides the
	/// source form.
	fn pick_credential(
		&self,
		field: fn(&TargetOverrides) -> &Option<Option<String>>,
		stored: Option<&Vec<u8>>,
	) -> Option<CredentialSource> {
		for tier in [self.global, self.local] {
			if let Some(Some(value)) = tier.map(field) {
				return value.clone().map(CredentialSource::Plain);
			}
		}
		stored.map(|bytes| CredentialSource::Encrypted(bytes.clone()))
	}
}

// endregion: --- ParamTiers

// region:    --- Tests


// endregion: --- Tests
