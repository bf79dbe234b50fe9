use crate::batch::BatchFailure;
use crate::{auth, secrets, store, webc};
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

/// Main apifan error.
///
/// Inside a batch, target-level failures are caught at the target boundary
/// and folded into error records; this type reaches callers for batch-level
/// failures, or when the lower layers are used directly.
#[derive(Debug, From)]
pub enum Error {
	// -- Modules
	#[from]
	Store(store::Error),
	#[from]
	Secrets(secrets::Error),
	#[from]
	Auth(auth::Error),
	#[from]
	Webc(webc::Error),
}

impl Error {
	/// The generic-text failure payload callers put on the wire. Never carries
	/// the underlying cause; that belongs in the log.
	#[must_use]
	pub fn to_failure(&self) -> BatchFailure {
		BatchFailure::generic()
	}
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
