use crate::secrets::{Error, KeyIv, Result, SecretField, SecretsConfig};
use crate::target::CredentialSource;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, KeyIvInit};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decrypts stored credential ciphertext on demand.
///
/// Strategy construction is the only caller; decrypted values live inside the
/// strategy instance for one invocation and are never written back anywhere.
#[derive(Debug, Clone, Default)]
pub struct CredentialVault {
	config: SecretsConfig,
}

/// Constructors
impl CredentialVault {
	pub fn new(config: SecretsConfig) -> Self {
		Self { config }
	}
}

/// Decrypt
impl CredentialVault {
	/// Resolve a credential source to plaintext.
	///
	/// Override-supplied values (`CredentialSource::Plain`) pass through
	/// untouched; only stored ciphertext goes through the cipher.
	pub fn reveal(&self, field: SecretField, source: &CredentialSource) -> Result<String> {
		match source {
			CredentialSource::Plain(value) => Ok(value.clone()),
			CredentialSource::Encrypted(bytes) => self.decrypt(field, bytes),
		}
	}

	/// Decrypt one stored column value.
	///
	/// The stored bytes are the UTF-8 text of a standard-base64 AES-256-CBC
	/// ciphertext with PKCS#7 padding. The key is hex-encoded; the IV is the
	/// configured string's bytes.
	pub fn decrypt(&self, field: SecretField, ciphertext: &[u8]) -> Result<String> {
		let KeyIv { key, iv } = self.config.get(field).ok_or(Error::MissingKeyFor { field })?;

		let key = hex::decode(key).map_err(|_| Error::InvalidKeyFor { field })?;
		let text = std::str::from_utf8(ciphertext).map_err(|_| Error::InvalidCiphertextFor { field })?;
		let ciphertext = BASE64_STANDARD
			.decode(text.trim())
			.map_err(|_| Error::InvalidCiphertextFor { field })?;

		let decryptor =
			Aes256CbcDec::new_from_slices(&key, iv.as_bytes()).map_err(|_| Error::InvalidKeyFor { field })?;
		let plaintext = decryptor
			.decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
			.map_err(|_| Error::DecryptFailedFor { field })?;

		String::from_utf8(plaintext).map_err(|_| Error::InvalidPlaintextFor { field })
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

	use super::*;
	use aes::cipher::BlockEncryptMut;

	type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

	const KEY_HEX: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
	const IV: &str = "0123456789abcdef";

	fn encrypt_fixture(plaintext: &str) -> Result<Vec<u8>> {
		let key = hex::decode(KEY_HEX)?;
		let encryptor = Aes256CbcEnc::new_from_slices(&key, IV.as_bytes()).map_err(|err| err.to_string())?;
		let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
		// Stored form is the base64 text's bytes.
		Ok(BASE64_STANDARD.encode(ciphertext).into_bytes())
	}

	fn vault() -> CredentialVault {
		CredentialVault::new(SecretsConfig::new().with_entry(SecretField::BearerToken, KEY_HEX, IV))
	}

	#[test]
	fn test_vault_decrypt_ok() -> Result<()> {
		// -- Setup & Fixtures
		let stored = encrypt_fixture("tok-123-secret")?;

		// -- Exec
		let plaintext = vault().decrypt(SecretField::BearerToken, &stored)?;

		// -- Check
		assert_eq!(plaintext, "tok-123-secret");

		Ok(())
	}

	#[test]
	fn test_vault_reveal_plain_passthrough_ok() -> Result<()> {
		// -- Setup & Fixtures
		// No key registered at all; a plain override must still resolve.
		let vault = CredentialVault::new(SecretsConfig::new());

		// -- Exec
		let value = vault.reveal(SecretField::ApiKeyKey, &CredentialSource::Plain("override-key".to_string()))?;

		// -- Check
		assert_eq!(value, "override-key");

		Ok(())
	}

	#[test]
	fn test_vault_missing_key_err() -> Result<()> {
		// -- Setup & Fixtures
		let stored = encrypt_fixture("whatever")?;

		// -- Exec
		let res = vault().decrypt(SecretField::ApiKeyKey, &stored);

		// -- Check
		assert!(
			matches!(res, Err(Error::MissingKeyFor { field: SecretField::ApiKeyKey })),
			"expected MissingKeyFor, got {res:?}"
		);

		Ok(())
	}

	#[test]
	fn test_vault_invalid_ciphertext_err() {
		// -- Exec
		let res = vault().decrypt(SecretField::BearerToken, b"!!not-base64!!");

		// -- Check
		assert!(
			matches!(res, Err(Error::InvalidCiphertextFor { .. })),
			"expected InvalidCiphertextFor, got {res:?}"
		);
	}

	#[test]
	fn test_vault_wrong_key_err() -> Result<()> {
		// -- Setup & Fixtures
		let stored = encrypt_fixture("tok-123-secret")?;
		let wrong =
			CredentialVault::new(SecretsConfig::new().with_entry(SecretField::BearerToken, "11".repeat(32), IV));

		// -- Exec
		let res = wrong.decrypt(SecretField::BearerToken, &stored);

		// -- Check
		// Wrong key either breaks the padding or yields garbage bytes.
		assert!(res.is_err(), "expected decrypt failure, got {res:?}");

		Ok(())
	}
}

// endregion: --- Tests
