use derive_more::From;
use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::serde_as;

/// A credential field value before vault resolution.
///
/// `Encrypted` carries stored ciphertext bytes; `Plain` carries an
/// override-supplied value. The vault decrypts the former and passes the
/// latter through, so overrides never need the deployment's keys.
#[serde_as]
#[derive(Clone, PartialEq, Eq, From, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
	#[from]
	Encrypted(#[serde_as(as = "Base64")] Vec<u8>),
	#[from]
	Plain(String),
}

// Plain values are live credentials; Debug shows shape only.
impl std::fmt::Debug for CredentialSource {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Encrypted(bytes) => write!(fmt, "CredentialSource::Encrypted({} bytes)", bytes.len()),
			Self::Plain(_) => write!(fmt, "CredentialSource::Plain(REDACTED)"),
		}
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

	use super::*;

	#[test]
	fn test_credential_source_serde_ok() -> Result<()> {
		// -- Exec
		let encrypted: CredentialSource = serde_json::from_str(r#"{"encrypted":"aGVsbG8="}"#)?;
		let plain: CredentialSource = serde_json::from_str(r#"{"plain":"tok-1"}"#)?;

		// -- Check
		assert_eq!(encrypted, CredentialSource::Encrypted(b"hello".to_vec()));
		assert_eq!(plain, CredentialSource::Plain("tok-1".to_string()));
		assert_eq!(serde_json::to_string(&encrypted)?, r#"{"encrypted":"aGVsbG8="}"#);

		Ok(())
	}

	#[test]
	fn test_credential_source_debug_redacts_ok() {
		// -- Exec
		let debug = format!("{:?}", CredentialSource::Plain("super-secret".to_string()));

		// -- Check
		assert!(!debug.contains("super-secret"), "plain value leaked: {debug}");
	}
}

// endregion: --- Tests
