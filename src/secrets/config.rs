use std::collections::HashMap;

// region:    --- SecretField

/// Identifies one encrypted credential column of the target descriptor.
///
/// Each field has its own key/IV pair; the basic and basic-and-bearer schemes
/// share descriptor columns but are keyed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretField {
	ApiKeyKey,
	BasicUsername,
	BasicPassword,
	BasicBearerUsername,
	BasicBearerPassword,
	BearerToken,
	OauthClientId,
	OauthClientSecret,
}

impl SecretField {
	pub const ALL: &[SecretField] = &[
		SecretField::ApiKeyKey,
		SecretField::BasicUsername,
		SecretField::BasicPassword,
		SecretField::BasicBearerUsername,
		SecretField::BasicBearerPassword,
		SecretField::BearerToken,
		SecretField::OauthClientId,
		SecretField::OauthClientSecret,
	];

	/// The environment variable stem for this field.
	///
	/// The full names are `{prefix}_{stem}_ENCRYPTION_KEY` and
	/// `{prefix}_{stem}_IV_STRING`.
	#[must_use]
	pub const fn env_stem(&self) -> &'static str {
		match self {
			SecretField::ApiKeyKey => "API_KEY_AUTHENTICATION_KEY",
			SecretField::BasicUsername => "BASIC_AUTHENTICATION_USERNAME",
			SecretField::BasicPassword => "BASIC_AUTHENTICATION_PASSWORD",
			SecretField::BasicBearerUsername => "BASIC_AND_BEARER_AUTHENTICATION_USERNAME",
			SecretField::BasicBearerPassword => "BASIC_AND_BEARER_AUTHENTICATION_PASSWORD",
			SecretField::BearerToken => "BEARER_AUTHENTICATION_TOKEN",
			SecretField::OauthClientId => "OAUTH_AUTHENTICATION_CLIENT_ID",
			SecretField::OauthClientSecret => "OAUTH_AUTHENTICATION_CLIENT_SECRET",
		}
	}
}

// endregion: --- SecretField

// region:    --- KeyIv

/// One decryption key/IV pair.
#[derive(Clone)]
pub struct KeyIv {
	/// Hex-encoded 256-bit key (64 hex characters).
	pub key: String,
	/// IV string whose UTF-8 bytes are the 16-byte IV.
	pub iv: String,
}

impl KeyIv {
	pub fn new(key: impl Into<String>, iv: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			iv: iv.into(),
		}
	}
}

// Key material never goes to logs.
impl std::fmt::Debug for KeyIv {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("KeyIv")
			.field("key", &"REDACTED")
			.field("iv", &"REDACTED")
			.finish()
	}
}

// endregion: --- KeyIv

// region:    --- SecretsConfig

/// Decryption key registry, injected into the [`CredentialVault`].
///
/// [`CredentialVault`]: crate::secrets::CredentialVault
#[derive(Debug, Clone, Default)]
pub struct SecretsConfig {
	entries: HashMap<SecretField, KeyIv>,
}

/// Constructors
impl SecretsConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build from process environment variables under the given prefix, e.g.
	/// `APIS_BEARER_AUTHENTICATION_TOKEN_ENCRYPTION_KEY`. Fields with an
	/// incomplete pair are left unregistered.
	#[must_use]
	pub fn from_env(prefix: &str) -> Self {
		Self::from_env_iter(prefix, std::env::vars())
	}

	/// Same as [`SecretsConfig::from_env`] but over an explicit variable set.
	#[must_use]
	pub fn from_env_iter(prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> Self {
		let vars: HashMap<String, String> = vars.into_iter().collect();
		let mut config = Self::new();
		for &field in SecretField::ALL {
			let stem = field.env_stem();
			let key = vars.get(&format!("{prefix}_{stem}_ENCRYPTION_KEY"));
			let iv = vars.get(&format!("{prefix}_{stem}_IV_STRING"));
			if let (Some(key), Some(iv)) = (key, iv) {
				config = config.with_entry(field, key, iv);
			}
		}
		config
	}
}

/// Chainable Setters
impl SecretsConfig {
	#[must_use]
	pub fn with_entry(mut self, field: SecretField, key: impl Into<String>, iv: impl Into<String>) -> Self {
		self.entries.insert(field, KeyIv::new(key, iv));
		self
	}
}

/// Getters
impl SecretsConfig {
	#[must_use]
	pub fn get(&self, field: SecretField) -> Option<&KeyIv> {
		self.entries.get(&field)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

// endregion: --- SecretsConfig

// region:    --- Tests


// endregion: --- Tests
