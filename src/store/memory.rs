use crate::store::{Condition, DescriptorStore, Error, FilterMap, Result, conditions};
use crate::target::TargetDescriptor;
use async_trait::async_trait;

/// In-memory descriptor store.
///
/// Matches conditions against the serialized (storage-shaped) form of each
/// descriptor, so filter values compare the way they would against rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	descriptors: Vec<TargetDescriptor>,
}

/// Constructors
impl MemoryStore {
	pub fn new(descriptors: Vec<TargetDescriptor>) -> Self {
		Self { descriptors }
	}
}

/// Chainable Setters
impl MemoryStore {
	#[must_use]
	pub fn with_descriptor(mut self, descriptor: TargetDescriptor) -> Self {
		self.descriptors.push(descriptor);
		self
	}
}

#[async_trait]
impl DescriptorStore for MemoryStore {
	async fn query(&self, filter: Option<&FilterMap>) -> Result<Vec<TargetDescriptor>> {
		let Some(filter) = filter else {
			return Ok(self.descriptors.clone());
		};

		let conditions = conditions(filter)?;

		let mut selected = Vec::new();
		for descriptor in &self.descriptors {
			let row = serde_json::to_value(descriptor)?;
			let mut matches = true;
			for (field, condition) in &conditions {
				let actual = row.get(field).ok_or_else(|| Error::UnknownField { field: field.clone() })?;
				let hit = match condition {
					Condition::Equals(wanted) => actual == wanted,
					Condition::In(wanted) => wanted.iter().any(|value| value == actual),
				};
				if !hit {
					matches = false;
					break;
				}
			}
			if matches {
				selected.push(descriptor.clone());
			}
		}
		Ok(selected)
	}
}

// region:    --- Tests


// endregion: --- Tests
