use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

/// Request build and execution failures.
///
/// In a batch these are per-target by construction: each target's request runs
/// inside its own catch boundary.
#[derive(Debug, From)]
pub enum Error {
	/// Method string is not one of the supported verbs.
	UnsupportedMethod { raw: String },

	/// The target resolved without a field the request cannot be built without.
	MissingRequestField { field: &'static str },

	/// A query/header template map was not a flat object of scalar values.
	InvalidTemplate { field: &'static str },

	/// The upstream replied with a non-2xx status.
	ResponseFailedStatus { status: u16, body: String },

	// -- Externals
	#[from]
	Reqwest(reqwest::Error),
	#[from]
	SerdeJson(serde_json::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
