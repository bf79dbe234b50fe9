use crate::secrets::SecretField;

pub type Result<T> = core::result::Result<T, Error>;

/// Decryption failures are always scoped to a single credential field; in a
/// batch they surface as per-target error records, never as batch failures.
#[derive(Debug, Clone)]
pub enum Error {
	/// No key/IV pair is registered for this credential field.
	MissingKeyFor { field: SecretField },

	/// Key is not 64 hex characters, or the IV is not 16 bytes.
	InvalidKeyFor { field: SecretField },

	/// Stored bytes are not the UTF-8 text of a standard-base64 ciphertext.
	InvalidCiphertextFor { field: SecretField },

	/// Block decryption failed (wrong key/IV pair or corrupted ciphertext).
	DecryptFailedFor { field: SecretField },

	/// Decrypted bytes are not valid UTF-8.
	InvalidPlaintextFor { field: SecretField },
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
