use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

/// Descriptor query failures — these fail the batch, not a single target.
#[derive(Debug, From)]
pub enum Error {
	/// Filter value shape has no condition translation (nested array or
	/// object value).
	InvalidFilter { field: String },

	/// Filter references a column the descriptor table does not have.
	UnknownField { field: String },

	// -- Externals
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
