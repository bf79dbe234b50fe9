use crate::auth::AuthKind;
use crate::{secrets, webc};
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

/// Strategy construction and token acquisition failures.
///
/// All of these are per-target: the aggregation boundary catches them and the
/// rest of the batch keeps going.
#[derive(Debug, From)]
pub enum Error {
	/// The scheme requires a field the resolution left without a value.
	MissingParameter { kind: AuthKind, field: &'static str },

	/// Grant string is not a supported OAuth grant.
	UnknownGrant { raw: String },

	/// The token endpoint answered, but no access token could be pulled out.
	TokenNotFound { kind: AuthKind },

	/// The authorization link could not be built from the configured base URL.
	InvalidAuthorizationUrl { url: String },

	// -- Modules
	#[from]
	Secrets(secrets::Error),
	#[from]
	Webc(webc::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
