use crate::store::{FilterMap, Result};
use crate::target::TargetDescriptor;
use async_trait::async_trait;

/// Read boundary for registered target descriptors.
///
/// Implementations translate the filter with [`conditions`] (or natively, as
/// long as the same scalar/array semantics hold) and must keep query failures
/// on the batch level.
///
/// [`conditions`]: crate::store::conditions
#[async_trait]
pub trait DescriptorStore: Send + Sync {
	/// Fetch the descriptors the filter selects; `None` selects everything.
	async fn query(&self, filter: Option<&FilterMap>) -> Result<Vec<TargetDescriptor>>;
}
