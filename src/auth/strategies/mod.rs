//! One implementation file per scheme.

// region:    --- Modules

mod support;

mod api_key;
mod basic;
mod basic_bearer;
mod bearer;
mod oauth;

pub use api_key::*;
pub use basic::*;
pub use basic_bearer::*;
pub use bearer::*;
pub use oauth::*;

// endregion: --- Modules
