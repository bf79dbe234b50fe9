use crate::auth::strategies::support::{AUTHORIZATION_HEADER, bearer_header_value, s256_challenge, token_string};
use crate::auth::{AuthKind, Error, Extractor, Result, TokenState, expiry_from_value};
use crate::resolver::EffectiveParams;
use crate::secrets::{CredentialVault, SecretField};
use crate::webc::{MethodKind, ResponseKind, WebClient, WebRequest, template_pairs};
use chrono::Utc;
use serde_json::Value;
use value_ext::JsonValueExt;

// region:    --- GrantKind

/// Supported OAuth grant flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantKind {
	AuthorizationCode,
	ClientCredentials,
	RefreshToken,
}

impl GrantKind {
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			GrantKind::AuthorizationCode => "authorization_code",
			GrantKind::ClientCredentials => "client_credentials",
			GrantKind::RefreshToken => "refresh_token",
		}
	}

	/// Lenient parse: case and separators do not matter, so stored values
	/// like `"Client Credentials"` or `"client-credentials"` all match.
	pub fn from_raw(raw: &str) -> Result<Self> {
		let normalized: String = raw
			.chars()
			.filter(char::is_ascii_alphanumeric)
			.collect::<String>()
			.to_ascii_lowercase();

		match normalized.as_str() {
			"authorizationcode" => Ok(GrantKind::AuthorizationCode),
			"clientcredentials" => Ok(GrantKind::ClientCredentials),
			"refreshtoken" => Ok(GrantKind::RefreshToken),
			_ => Err(Error::UnknownGrant { raw: raw.to_string() }),
		}
	}
}

impl std::fmt::Display for GrantKind {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.write_str(self.as_str())
	}
}

// endregion: --- GrantKind

// region:    --- OAuthAuth

/// Grant-based token acquisition against a token endpoint.
///
/// Client credentials go in the request body (`client_secret_post`). When the
/// acquired token expires inside the invocation and a refresh token was
/// extracted, the refresh grant runs first and the primary grant is the
/// fallback.
#[derive(Clone)]
pub struct OAuthAuth {
	grant: GrantKind,
	client_id: Option<String>,
	client_secret: Option<String>,
	token_url: String,
	authorization_url: Option<String>,
	redirect_url: Option<String>,
	scope: Option<String>,
	access_token_extractor: Option<Extractor>,
	refresh_token_extractor: Option<Extractor>,
	expiration_extractor: Option<Extractor>,
	expiration_buffer_secs: i64,
	pkce_enabled: bool,
	additional_parameter_map: Option<Value>,
	token: Option<TokenState>,
}

impl OAuthAuth {
	pub(in crate::auth) fn from_params(params: &EffectiveParams, vault: &CredentialVault) -> Result<Self> {
		const KIND: AuthKind = AuthKind::OAuth;

		let grant_raw = params.oauth_authentication_grant_type.as_deref().ok_or(Error::MissingParameter {
			kind: KIND,
			field: "oauth_authentication_grant_type",
		})?;
		let token_url = params.oauth_authentication_token_url.clone().ok_or(Error::MissingParameter {
			kind: KIND,
			field: "oauth_authentication_token_url",
		})?;

		let client_id = params
			.oauth_authentication_client_id
			.as_ref()
			.map(|source| vault.reveal(SecretField::OauthClientId, source))
			.transpose()?;
		let client_secret = params
			.oauth_authentication_client_secret
			.as_ref()
			.map(|source| vault.reveal(SecretField::OauthClientSecret, source))
			.transpose()?;

		Ok(Self {
			grant: GrantKind::from_raw(grant_raw)?,
			client_id,
			client_secret,
			token_url,
			authorization_url: params.oauth_authentication_authorization_url.clone(),
			redirect_url: params.oauth_authentication_redirect_url.clone(),
			scope: params.oauth_authentication_scope.clone(),
			access_token_extractor: params
				.oauth_authentication_access_token_extractor_list
				.clone()
				.map(Extractor::new),
			refresh_token_extractor: params
				.oauth_authentication_refresh_token_extractor_list
				.clone()
				.map(Extractor::new),
			expiration_extractor: params
				.oauth_authentication_expiration_extractor_list
				.clone()
				.map(Extractor::new),
			expiration_buffer_secs: params.oauth_authentication_expiration_buffer.unwrap_or(0),
			pkce_enabled: params.oauth_authentication_pkce_enabled.unwrap_or(false),
			additional_parameter_map: params.oauth_authentication_additional_parameter_map.clone(),
			token: None,
		})
	}

	/// Acquire or refresh the token if needed, then attach it.
	pub async fn apply(&mut self, webc: &WebClient, request: &mut WebRequest) -> Result<()> {
		let access_token = self.ensure_token(webc).await?;
		request.push_header(AUTHORIZATION_HEADER, bearer_header_value(&access_token));
		Ok(())
	}

	async fn ensure_token(&mut self, webc: &WebClient) -> Result<String> {
		let now = Utc::now();

		if let Some(token) = &self.token {
			if !token.is_expired(self.expiration_buffer_secs, now) {
				return Ok(token.access_token.clone());
			}

			if let Some(refresh_token) = token.refresh_token.clone() {
				match self.request_token(webc, self.refresh_form(&refresh_token)?).await {
					Ok(token) => {
						let access_token = token.access_token.clone();
						self.token = Some(token);
						return Ok(access_token);
					}
					Err(err) => {
						tracing::debug!(error = %err, "token refresh failed, retrying the primary grant");
					}
				}
			}
		}

		let token = self.request_token(webc, self.primary_form()?).await?;
		let access_token = token.access_token.clone();
		self.token = Some(token);
		Ok(access_token)
	}

	async fn request_token(&self, webc: &WebClient, form: Vec<(String, String)>) -> Result<TokenState> {
		let request = WebRequest::new(MethodKind::Post, self.token_url.clone())
			.with_form(form)
			.with_response_kind(ResponseKind::Json);

		let response = webc.execute(&request).await?;
		let envelope = response.to_envelope()?;
		let now = Utc::now();

		let access_token = match &self.access_token_extractor {
			Some(extractor) => token_string(extractor.extract(&envelope)),
			None => envelope
				.x_get::<String>("/data/access_token")
				.map_err(|_| Error::TokenNotFound { kind: AuthKind::OAuth })?,
		};

		// The refresh token is opportunistic: only a string landing counts.
		let refresh_token = match &self.refresh_token_extractor {
			Some(extractor) => extractor.extract(&envelope).as_str().map(str::to_string),
			None => envelope.x_get::<String>("/data/refresh_token").ok(),
		};

		let expires_at = match &self.expiration_extractor {
			Some(extractor) => expiry_from_value(extractor.extract(&envelope), now),
			None => envelope
				.pointer("/data/expires_in")
				.and_then(|value| expiry_from_value(value, now)),
		};

		Ok(TokenState {
			access_token,
			refresh_token,
			expires_at,
		})
	}
}

/// Token request forms
impl OAuthAuth {
	/// The token request for the configured grant, additional parameters
	/// merged last (replacing on key collision).
	fn primary_form(&self) -> Result<Vec<(String, String)>> {
		let mut form = vec![("grant_type".to_string(), self.grant.as_str().to_string())];

		if let Some(client_id) = &self.client_id {
			form.push(("client_id".to_string(), client_id.clone()));
		}
		if let Some(client_secret) = &self.client_secret {
			form.push(("client_secret".to_string(), client_secret.clone()));
		}
		if let Some(scope) = &self.scope {
			form.push(("scope".to_string(), scope.clone()));
		}
		if self.grant == GrantKind::AuthorizationCode
			&& let Some(redirect_url) = &self.redirect_url
		{
			form.push(("redirect_uri".to_string(), redirect_url.clone()));
		}

		self.merge_additional(form)
	}

	/// The refresh form used when a previously extracted refresh token exists.
	fn refresh_form(&self, refresh_token: &str) -> Result<Vec<(String, String)>> {
		let mut form = vec![
			("grant_type".to_string(), GrantKind::RefreshToken.as_str().to_string()),
			("refresh_token".to_string(), refresh_token.to_string()),
		];

		if let Some(client_id) = &self.client_id {
			form.push(("client_id".to_string(), client_id.clone()));
		}
		if let Some(client_secret) = &self.client_secret {
			form.push(("client_secret".to_string(), client_secret.clone()));
		}

		self.merge_additional(form)
	}

	// Authorization-code inputs (code, code_verifier, ...) arrive through the
	// additional parameter map, so the merge runs on every token request.
	fn merge_additional(&self, mut form: Vec<(String, String)>) -> Result<Vec<(String, String)>> {
		let Some(map) = &self.additional_parameter_map else {
			return Ok(form);
		};

		for (name, value) in template_pairs(map, "oauth_authentication_additional_parameter_map")? {
			match form.iter_mut().find(|(existing, _)| *existing == name) {
				Some((_, existing_value)) => *existing_value = value,
				None => form.push((name, value)),
			}
		}
		Ok(form)
	}
}

/// Authorization link
impl OAuthAuth {
	/// Build the user-facing authorization request URL for the
	/// authorization-code flow.
	///
	/// With PKCE enabled and a verifier supplied, the S256 challenge pair is
	/// appended; the verifier itself never appears in the link.
	pub fn authorization_request_url(&self, state: Option<&str>, code_verifier: Option<&str>) -> Result<String> {
		let base = self.authorization_url.as_deref().ok_or(Error::MissingParameter {
			kind: AuthKind::OAuth,
			field: "oauth_authentication_authorization_url",
		})?;

		let mut params: Vec<(&str, String)> = vec![("response_type", "code".to_string())];
		if let Some(client_id) = &self.client_id {
			params.push(("client_id", client_id.clone()));
		}
		if let Some(redirect_url) = &self.redirect_url {
			params.push(("redirect_uri", redirect_url.clone()));
		}
		if let Some(scope) = &self.scope {
			params.push(("scope", scope.clone()));
		}
		if let Some(state) = state {
			params.push(("state", state.to_string()));
		}
		if self.pkce_enabled
			&& let Some(verifier) = code_verifier
		{
			params.push(("code_challenge", s256_challenge(verifier)));
			params.push(("code_challenge_method", "S256".to_string()));
		}

		let url = reqwest::Url::parse_with_params(base, &params)
			.map_err(|_| Error::InvalidAuthorizationUrl { url: base.to_string() })?;

		Ok(url.to_string())
	}
}

impl std::fmt::Debug for OAuthAuth {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("OAuthAuth")
			.field("grant", &self.grant)
			.field("client_id", &self.client_id.as_ref().map(|_| "REDACTED"))
			.field("client_secret", &self.client_secret.as_ref().map(|_| "REDACTED"))
			.field("token_url", &self.token_url)
			.field("authorization_url", &self.authorization_url)
			.field("redirect_url", &self.redirect_url)
			.field("scope", &self.scope)
			.field("expiration_buffer_secs", &self.expiration_buffer_secs)
			.field("pkce_enabled", &self.pkce_enabled)
			.field("token", &self.token)
			.finish()
	}
}

// endregion: --- OAuthAuth

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

	use super::*;
	use serde_json::json;

	fn auth() -> Result<OAuthAuth> {
		let params = EffectiveParams {
			authentication_type: Some(AuthKind::OAuth.as_str().to_string()),
			oauth_authentication_grant_type: Some("client_credentials".to_string()),
			oauth_authentication_client_id: Some("client-1".to_string().into()),
			oauth_authentication_client_secret: Some("shh".to_string().into()),
			oauth_authentication_token_url: Some("https://idp.example.test/token".to_string()),
			oauth_authentication_scope: Some("read:all".to_string()),
			..Default::default()
		};
		Ok(OAuthAuth::from_params(&params, &CredentialVault::default())?)
	}

	#[test]
	fn test_grant_kind_from_raw_lenient_ok() -> Result<()> {
		// -- Exec & Check
		assert_eq!(GrantKind::from_raw("client_credentials")?, GrantKind::ClientCredentials);
		assert_eq!(GrantKind::from_raw("Client Credentials")?, GrantKind::ClientCredentials);
		assert_eq!(GrantKind::from_raw("authorization-code")?, GrantKind::AuthorizationCode);
		assert_eq!(GrantKind::from_raw("RefreshToken")?, GrantKind::RefreshToken);
		assert!(matches!(GrantKind::from_raw("password"), Err(Error::UnknownGrant { .. })));

		Ok(())
	}

	#[test]
	fn test_oauth_primary_form_ok() -> Result<()> {
		// -- Exec
		let form = auth()?.primary_form()?;

		// -- Check
		assert_eq!(
			form,
			vec![
				("grant_type".to_string(), "client_credentials".to_string()),
				("client_id".to_string(), "client-1".to_string()),
				("client_secret".to_string(), "shh".to_string()),
				("scope".to_string(), "read:all".to_string()),
			]
		);

		Ok(())
	}

	#[test]
	fn test_oauth_additional_map_merges_last_ok() -> Result<()> {
		// -- Setup & Fixtures
		let mut auth = auth()?;
		auth.additional_parameter_map = Some(json!({"audience": "reporting", "scope": "write:all"}));

		// -- Exec
		let form = auth.primary_form()?;

		// -- Check
		// New keys append; colliding keys replace the base value.
		assert!(form.contains(&("audience".to_string(), "reporting".to_string())));
		assert!(form.contains(&("scope".to_string(), "write:all".to_string())));
		assert!(!form.contains(&("scope".to_string(), "read:all".to_string())));

		Ok(())
	}

	#[test]
	fn test_oauth_authorization_url_pkce_ok() -> Result<()> {
		// -- Setup & Fixtures
		let mut auth = auth()?;
		auth.grant = GrantKind::AuthorizationCode;
		auth.authorization_url = Some("https://idp.example.test/authorize".to_string());
		auth.redirect_url = Some("https://app.example.test/callback".to_string());
		auth.pkce_enabled = true;

		// -- Exec
		let url = auth.authorization_request_url(Some("st-1"), Some("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"))?;

		// -- Check
		assert!(url.starts_with("https://idp.example.test/authorize?response_type=code"));
		assert!(url.contains("client_id=client-1"));
		assert!(url.contains("state=st-1"));
		assert!(url.contains("code_challenge=E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"));
		assert!(url.contains("code_challenge_method=S256"));
		// The verifier itself must never appear in the link.
		assert!(!url.contains("dBjftJeZ4CVP"));

		Ok(())
	}

	#[test]
	fn test_oauth_authorization_url_without_pkce_ok() -> Result<()> {
		// -- Setup & Fixtures
		let mut auth = auth()?;
		auth.authorization_url = Some("https://idp.example.test/authorize".to_string());

		// -- Exec
		let url = auth.authorization_request_url(None, None)?;

		// -- Check
		assert!(!url.contains("code_challenge"));
		assert!(!url.contains("state="));

		Ok(())
	}

	#[test]
	fn test_oauth_debug_redacts_ok() -> Result<()> {
		// -- Exec
		let debug = format!("{:?}", auth()?);

		// -- Check
		assert!(!debug.contains("shh"), "client secret leaked: {debug}");

		Ok(())
	}
}

// endregion: --- Tests
