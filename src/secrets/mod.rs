//! At-rest credential decryption.
//!
//! Stored descriptor columns that hold credentials are AES-256-CBC ciphertext;
//! the [`CredentialVault`] turns them back into plaintext on demand, one
//! key/IV pair per credential column. The key registry is injected at
//! construction — nothing in this module reads ambient process state at
//! decrypt time, so tests can run it with fixed keys.

// region:    --- Modules

mod config;
mod error;
mod vault;

pub use config::*;
pub use error::{Error, Result};
pub use vault::*;

// endregion: --- Modules
