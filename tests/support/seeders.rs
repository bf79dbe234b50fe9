//! Seed data builders shared by the integration tests.

use crate::support::{Result, TEST_IV, TEST_KEY_HEX};
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockEncryptMut, KeyIvInit};
use apifan::secrets::{SecretField, SecretsConfig};
use apifan::target::TargetDescriptor;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Encrypt a plaintext the way provisioning fills credential columns: the
/// stored bytes are the UTF-8 text of the base64 AES-256-CBC ciphertext.
pub fn seed_ciphertext(plaintext: &str) -> Result<Vec<u8>> {
	let key = hex::decode(TEST_KEY_HEX)?;
	let encryptor = Aes256CbcEnc::new_from_slices(&key, TEST_IV.as_bytes()).map_err(|err| err.to_string())?;
	let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
	Ok(BASE64_STANDARD.encode(ciphertext).into_bytes())
}

/// A secrets config with every credential field registered on the shared
/// test key pair.
pub fn seed_secrets() -> SecretsConfig {
	SecretField::ALL
		.iter()
		.fold(SecretsConfig::new(), |config, &field| config.with_entry(field, TEST_KEY_HEX, TEST_IV))
}

/// A minimal active GET/json descriptor pointing at `url`.
pub fn seed_descriptor(id: i64, name: &str, url: &str) -> TargetDescriptor {
	TargetDescriptor::new(id, name, "get", url)
}
