use crate::resolver::TargetOverrides;
use crate::store::FilterMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One aggregation request: which targets, and the override tiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchRequest {
	/// Storage filter; scalar values select by equality, arrays by membership.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub filter_map: Option<FilterMap>,

	/// Overrides applied to every target of the batch.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub global_override_map: Option<TargetOverrides>,

	/// Overrides addressed to single targets, keyed by target name.
	#[serde(skip_serializing_if = "HashMap::is_empty")]
	pub per_target_override_map: HashMap<String, TargetOverrides>,
}

/// Chainable Setters
impl BatchRequest {
	#[must_use]
	pub fn with_filter(mut self, field: impl Into<String>, value: Value) -> Self {
		self.filter_map.get_or_insert_default().insert(field.into(), value);
		self
	}

	#[must_use]
	pub fn with_global_overrides(mut self, overrides: TargetOverrides) -> Self {
		self.global_override_map = Some(overrides);
		self
	}

	#[must_use]
	pub fn with_target_overrides(mut self, name: impl Into<String>, overrides: TargetOverrides) -> Self {
		self.per_target_override_map.insert(name.into(), overrides);
		self
	}
}

// region:    --- Tests


// endregion: --- Tests
