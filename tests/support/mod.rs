//! Some support utilities for the tests
//! Note: Must be imported in each test file as `mod support;`

#![allow(unused)] // For test-support

// region:    --- Modules

mod seeders;

pub use seeders::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

// region:    --- Constants

/// 32-byte AES key as 64 hex chars, shared by every seeded credential column.
pub const TEST_KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

/// 16-char IV string, used byte-for-byte.
pub const TEST_IV: &str = "0123456789abcdef";

// endregion: --- Constants
