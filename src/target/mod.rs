//! Target descriptors and credential sources.
//!
//! A [`TargetDescriptor`] is one registered upstream API as the storage layer
//! holds it: plain configuration columns plus encrypted credential columns.
//! Descriptors are read-only inputs; resolution and decryption never write
//! back to them.

// region:    --- Modules

mod credential;
mod descriptor;

pub use credential::*;
pub use descriptor::*;

// endregion: --- Modules
