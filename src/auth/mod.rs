//! Authentication strategies.
//!
//! A target's `authentication_type` string selects one of five schemes (or
//! none). The [`AuthStrategy`] factory resolves and decrypts everything the
//! scheme needs at construction time, then `apply` decorates the outbound
//! request — running the credential-exchange call first for the two-phase
//! schemes. Strategy state lives for one invocation; acquired tokens are
//! never shared across batches.

// region:    --- Modules

mod auth_kind;
mod error;
mod extractor;
mod strategies;
mod strategy;
mod token;

pub use auth_kind::*;
pub use error::{Error, Result};
pub use extractor::*;
pub use strategies::*;
pub use strategy::*;
pub use token::*;

// endregion: --- Modules
