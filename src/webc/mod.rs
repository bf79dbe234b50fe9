//! Thin web-client layer over reqwest.
//!
//! A [`WebRequest`] is a fully-described outbound call; strategies decorate it
//! with headers or query pairs before the [`WebClient`] dispatches it. The
//! client treats any non-2xx reply as an error, so callers never inspect a
//! half-failed response.

// region:    --- Modules

mod error;
mod web_client;
mod web_request;
mod web_response;

pub use error::{Error, Result};
pub use web_client::*;
pub use web_request::*;
pub use web_response::*;

// endregion: --- Modules
