use crate::auth::strategies::support::{AUTHORIZATION_HEADER, basic_header_value};
use crate::auth::{AuthKind, Error, Result};
use crate::resolver::EffectiveParams;
use crate::secrets::{CredentialVault, SecretField};
use crate::webc::WebRequest;

/// `Authorization: Basic` from a username/password pair. No token lifecycle.
#[derive(Clone)]
pub struct BasicAuth {
	username: String,
	password: String,
}

impl BasicAuth {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: password.into(),
		}
	}

	pub(in crate::auth) fn from_params(params: &EffectiveParams, vault: &CredentialVault) -> Result<Self> {
		const KIND: AuthKind = AuthKind::Basic;

		let username = params.basic_authentication_username.as_ref().ok_or(Error::MissingParameter {
			kind: KIND,
			field: "basic_authentication_username",
		})?;
		let password = params.basic_authentication_password.as_ref().ok_or(Error::MissingParameter {
			kind: KIND,
			field: "basic_authentication_password",
		})?;

		Ok(Self::new(
			vault.reveal(SecretField::BasicUsername, username)?,
			vault.reveal(SecretField::BasicPassword, password)?,
		))
	}

	pub fn apply(&self, request: &mut WebRequest) {
		request.push_header(AUTHORIZATION_HEADER, basic_header_value(&self.username, &self.password));
	}
}

impl std::fmt::Debug for BasicAuth {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("BasicAuth")
			.field("username", &"REDACTED")
			.field("password", &"REDACTED")
			.finish()
	}
}
