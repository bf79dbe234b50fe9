use crate::auth::strategies::support::{AUTHORIZATION_HEADER, bearer_header_value};
use crate::auth::{AuthKind, Error, Result};
use crate::resolver::EffectiveParams;
use crate::secrets::{CredentialVault, SecretField};
use crate::webc::WebRequest;

/// Static bearer token. No token lifecycle.
#[derive(Clone)]
pub struct BearerAuth {
	token: String,
}

impl BearerAuth {
	pub fn new(token: impl Into<String>) -> Self {
		Self { token: token.into() }
	}

	pub(in crate::auth) fn from_params(params: &EffectiveParams, vault: &CredentialVault) -> Result<Self> {
		let source = params.bearer_authentication_token.as_ref().ok_or(Error::MissingParameter {
			kind: AuthKind::Bearer,
			field: "bearer_authentication_token",
		})?;

		Ok(Self::new(vault.reveal(SecretField::BearerToken, source)?))
	}

	pub fn apply(&self, request: &mut WebRequest) {
		request.push_header(AUTHORIZATION_HEADER, bearer_header_value(&self.token));
	}
}

impl std::fmt::Debug for BearerAuth {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("BearerAuth").field("token", &"REDACTED").finish()
	}
}
