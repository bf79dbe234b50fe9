//! Per-invocation parameter resolution.
//!
//! Every configurable field of a target resolves through the same hierarchy:
//! batch-global override, then the override addressed to the target by name,
//! then the stored descriptor value. First defined wins, field by field, and
//! an explicit null override counts as defined — it removes the stored value
//! for this invocation.

// region:    --- Modules

mod effective;
mod overrides;

pub use effective::*;
pub use overrides::*;

// endregion: --- Modules
