//! Descriptor storage boundary.
//!
//! The aggregator reads target descriptors through the [`DescriptorStore`]
//! trait; callers narrow the set with a filter map whose conditions translate
//! mechanically (scalar means equality, array means membership). An invalid
//! filter fails the whole batch — it is the caller's input, not a target's.

// region:    --- Modules

mod descriptor_store;
mod error;
mod filter;
mod memory;

pub use descriptor_store::*;
pub use error::{Error, Result};
pub use filter::*;
pub use memory::*;

// endregion: --- Modules
