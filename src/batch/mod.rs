//! Batch aggregation.
//!
//! One [`BatchRequest`] fans out to every selected target concurrently; each
//! target resolves, authenticates and executes inside its own catch boundary,
//! so one bad credential or dead upstream costs exactly one error record. The
//! all-target barrier completes when the slowest target does.

// region:    --- Modules

mod aggregator;
mod envelope;
mod record;
mod request;

pub use aggregator::*;
pub use envelope::*;
pub use record::*;
pub use request::*;

// endregion: --- Modules
