use crate::auth::{ApiKeyAuth, AuthKind, BasicAuth, BasicBearerAuth, BearerAuth, OAuthAuth, Result};
use crate::resolver::EffectiveParams;
use crate::secrets::CredentialVault;
use crate::webc::{WebClient, WebRequest};

/// One constructed authentication strategy for one target, one invocation.
///
/// Construction is the only place credential ciphertext is decrypted; after
/// `from_params` returns, the descriptor is no longer needed for
/// authentication.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
	/// No scheme declared, or a string no scheme matches: requests go out
	/// untouched.
	Passthrough,
	ApiKey(ApiKeyAuth),
	Basic(BasicAuth),
	Bearer(BearerAuth),
	BasicBearer(BasicBearerAuth),
	OAuth(OAuthAuth),
}

impl AuthStrategy {
	/// Build the strategy a target's effective parameters call for.
	pub fn from_params(params: &EffectiveParams, vault: &CredentialVault) -> Result<Self> {
		let Some(kind) = params.authentication_type.as_deref().and_then(AuthKind::from_raw) else {
			return Ok(AuthStrategy::Passthrough);
		};

		let strategy = match kind {
			AuthKind::ApiKey => AuthStrategy::ApiKey(ApiKeyAuth::from_params(params, vault)?),
			AuthKind::Basic => AuthStrategy::Basic(BasicAuth::from_params(params, vault)?),
			AuthKind::Bearer => AuthStrategy::Bearer(BearerAuth::from_params(params, vault)?),
			AuthKind::BasicBearer => AuthStrategy::BasicBearer(BasicBearerAuth::from_params(params, vault)?),
			AuthKind::OAuth => AuthStrategy::OAuth(OAuthAuth::from_params(params, vault)?),
		};

		Ok(strategy)
	}

	/// The kind this strategy implements; `None` for passthrough.
	#[must_use]
	pub fn kind(&self) -> Option<AuthKind> {
		match self {
			AuthStrategy::Passthrough => None,
			AuthStrategy::ApiKey(_) => Some(AuthKind::ApiKey),
			AuthStrategy::Basic(_) => Some(AuthKind::Basic),
			AuthStrategy::Bearer(_) => Some(AuthKind::Bearer),
			AuthStrategy::BasicBearer(_) => Some(AuthKind::BasicBearer),
			AuthStrategy::OAuth(_) => Some(AuthKind::OAuth),
		}
	}

	/// Decorate the outbound request, running the credential exchange first
	/// where the scheme has one.
	pub async fn apply(&mut self, webc: &WebClient, request: &mut WebRequest) -> Result<()> {
		match self {
			AuthStrategy::Passthrough => Ok(()),
			AuthStrategy::ApiKey(auth) => {
				auth.apply(request);
				Ok(())
			}
			AuthStrategy::Basic(auth) => {
				auth.apply(request);
				Ok(())
			}
			AuthStrategy::Bearer(auth) => {
				auth.apply(request);
				Ok(())
			}
			AuthStrategy::BasicBearer(auth) => auth.apply(webc, request).await,
			AuthStrategy::OAuth(auth) => auth.apply(webc, request).await,
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
