use crate::auth::{AuthKind, Error, Result};
use crate::resolver::EffectiveParams;
use crate::secrets::{CredentialVault, SecretField};
use crate::webc::WebRequest;

/// Static key under a configured header name. No token lifecycle.
#[derive(Clone)]
pub struct ApiKeyAuth {
	header_name: String,
	key: String,
}

impl ApiKeyAuth {
	pub fn new(header_name: impl Into<String>, key: impl Into<String>) -> Self {
		Self {
			header_name: header_name.into(),
			key: key.into(),
		}
	}

	pub(in crate::auth) fn from_params(params: &EffectiveParams, vault: &CredentialVault) -> Result<Self> {
		const KIND: AuthKind = AuthKind::ApiKey;

		let source = params.api_key_authentication_key.as_ref().ok_or(Error::MissingParameter {
			kind: KIND,
			field: "api_key_authentication_key",
		})?;
		let header_name = params
			.api_key_authentication_header_name
			.clone()
			.ok_or(Error::MissingParameter {
				kind: KIND,
				field: "api_key_authentication_header_name",
			})?;

		let key = vault.reveal(SecretField::ApiKeyKey, source)?;

		Ok(Self::new(header_name, key))
	}

	pub fn apply(&self, request: &mut WebRequest) {
		request.push_header(&self.header_name, &self.key);
	}
}

impl std::fmt::Debug for ApiKeyAuth {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("ApiKeyAuth")
			.field("header_name", &self.header_name)
			.field("key", &"REDACTED")
			.finish()
	}
}
