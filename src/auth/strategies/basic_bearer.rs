use crate::auth::strategies::support::{AUTHORIZATION_HEADER, basic_header_value, bearer_header_value, token_string};
use crate::auth::{AuthKind, Error, Extractor, Result, TokenState, expiry_from_value};
use crate::resolver::EffectiveParams;
use crate::secrets::{CredentialVault, SecretField};
use crate::webc::{MethodKind, ResponseKind, WebClient, WebRequest, template_pairs};
use chrono::Utc;
use serde_json::Value;

/// Two-phase scheme: a basic-authenticated exchange call obtains a bearer
/// token, which then rides on the primary request.
///
/// One instance covers one target for one invocation; the acquired token is
/// reused across `apply` calls until it enters the expiration buffer window.
#[derive(Clone)]
pub struct BasicBearerAuth {
	method: MethodKind,
	url: String,
	username: Option<String>,
	password: Option<String>,
	query_map: Option<Value>,
	header_map: Option<Value>,
	body: Option<Value>,
	token_extractor: Option<Extractor>,
	expiration_extractor: Option<Extractor>,
	expiration_buffer_secs: i64,
	token: Option<TokenState>,
}

impl BasicBearerAuth {
	pub(in crate::auth) fn from_params(params: &EffectiveParams, vault: &CredentialVault) -> Result<Self> {
		const KIND: AuthKind = AuthKind::BasicBearer;

		let method_raw = params
			.basic_and_bearer_authentication_method_type
			.as_deref()
			.ok_or(Error::MissingParameter {
				kind: KIND,
				field: "basic_and_bearer_authentication_method_type",
			})?;
		let url = params
			.basic_and_bearer_authentication_url
			.clone()
			.ok_or(Error::MissingParameter {
				kind: KIND,
				field: "basic_and_bearer_authentication_url",
			})?;

		// The exchange call shares the basic credential columns but has its
		// own key/IV pair. Either credential may be absent; the exchange then
		// goes out without the basic header.
		let username = params
			.basic_authentication_username
			.as_ref()
			.map(|source| vault.reveal(SecretField::BasicBearerUsername, source))
			.transpose()?;
		let password = params
			.basic_authentication_password
			.as_ref()
			.map(|source| vault.reveal(SecretField::BasicBearerPassword, source))
			.transpose()?;

		Ok(Self {
			method: MethodKind::from_raw(method_raw)?,
			url,
			username,
			password,
			query_map: params.basic_and_bearer_authentication_query_parameter_map.clone(),
			header_map: params.basic_and_bearer_authentication_header_map.clone(),
			body: params.basic_and_bearer_authentication_body.clone(),
			token_extractor: params
				.basic_and_bearer_authentication_token_extractor_list
				.clone()
				.map(Extractor::new),
			expiration_extractor: params
				.basic_and_bearer_authentication_expiration_extractor_list
				.clone()
				.map(Extractor::new),
			expiration_buffer_secs: params.basic_and_bearer_authentication_expiration_buffer.unwrap_or(0),
			token: None,
		})
	}

	/// Acquire the token if needed, then attach it.
	pub async fn apply(&mut self, webc: &WebClient, request: &mut WebRequest) -> Result<()> {
		let access_token = self.ensure_token(webc).await?;
		request.push_header(AUTHORIZATION_HEADER, bearer_header_value(&access_token));
		Ok(())
	}

	async fn ensure_token(&mut self, webc: &WebClient) -> Result<String> {
		let now = Utc::now();

		if let Some(token) = &self.token
			&& !token.is_expired(self.expiration_buffer_secs, now)
		{
			return Ok(token.access_token.clone());
		}

		let envelope = self.exchange(webc).await?;

		let token = match &self.token_extractor {
			Some(extractor) => TokenState {
				access_token: token_string(extractor.extract(&envelope)),
				refresh_token: None,
				expires_at: self
					.expiration_extractor
					.as_ref()
					.and_then(|extractor| expiry_from_value(extractor.extract(&envelope), now)),
			},
			// Without a pipeline the reply body itself is the credential; no
			// expiration is tracked, so the exchange runs once per instance.
			None => TokenState {
				access_token: token_string(envelope.get("data").unwrap_or(&Value::Null)),
				refresh_token: None,
				expires_at: None,
			},
		};

		let access_token = token.access_token.clone();
		self.token = Some(token);
		Ok(access_token)
	}

	/// Run the credential-exchange call and return its envelope.
	async fn exchange(&self, webc: &WebClient) -> Result<Value> {
		let mut request = WebRequest::new(self.method, self.url.clone()).with_response_kind(ResponseKind::Json);

		if let Some(map) = &self.query_map {
			request.query = template_pairs(map, "basic_and_bearer_authentication_query_parameter_map")?;
		}
		if let Some(map) = &self.header_map {
			request.headers = template_pairs(map, "basic_and_bearer_authentication_header_map")?;
		}
		if let Some(body) = &self.body {
			request.body = Some(body.clone());
		}
		if let (Some(username), Some(password)) = (&self.username, &self.password) {
			request.push_header(AUTHORIZATION_HEADER, basic_header_value(username, password));
		}

		let response = webc.execute(&request).await?;
		Ok(response.to_envelope()?)
	}
}

impl std::fmt::Debug for BasicBearerAuth {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("BasicBearerAuth")
			.field("method", &self.method)
			.field("url", &self.url)
			.field("username", &self.username.as_ref().map(|_| "REDACTED"))
			.field("password", &self.password.as_ref().map(|_| "REDACTED"))
			.field("token_extractor", &self.token_extractor)
			.field("expiration_extractor", &self.expiration_extractor)
			.field("expiration_buffer_secs", &self.expiration_buffer_secs)
			.field("token", &self.token)
			.finish()
	}
}
