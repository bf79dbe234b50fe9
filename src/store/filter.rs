use crate::store::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Caller-supplied storage filter: column name to wanted value(s).
pub type FilterMap = BTreeMap<String, Value>;

/// One translated query condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
	Equals(Value),
	In(Vec<Value>),
}

/// Translate a filter map into per-column conditions.
///
/// The translation is purely structural: an array value becomes a membership
/// condition, any scalar becomes an equality condition. Object values — at
/// the top level or inside an array — have no translation.
pub fn conditions(filter: &FilterMap) -> Result<Vec<(String, Condition)>> {
	filter
		.iter()
		.map(|(field, value)| {
			let condition = match value {
				Value::Array(items) => {
					if items.iter().any(|item| item.is_array() || item.is_object()) {
						return Err(Error::InvalidFilter { field: field.clone() });
					}
					Condition::In(items.clone())
				}
				Value::Object(_) => return Err(Error::InvalidFilter { field: field.clone() }),
				scalar => Condition::Equals(scalar.clone()),
			};
			Ok((field.clone(), condition))
		})
		.collect()
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

	use super::*;
	use serde_json::json;

	#[test]
	fn test_conditions_scalar_and_array_ok() -> Result<()> {
		// -- Setup & Fixtures
		let filter = FilterMap::from([
			("group_name".to_string(), json!("payments")),
			("id".to_string(), json!([1, 2, 3])),
			("is_api_active".to_string(), json!(true)),
		]);

		// -- Exec
		let conditions = conditions(&filter)?;

		// -- Check
		assert_eq!(
			conditions,
			vec![
				("group_name".to_string(), Condition::Equals(json!("payments"))),
				("id".to_string(), Condition::In(vec![json!(1), json!(2), json!(3)])),
				("is_api_active".to_string(), Condition::Equals(json!(true))),
			]
		);

		Ok(())
	}

	#[test]
	fn test_conditions_object_value_err() {
		// -- Exec
		let res = conditions(&FilterMap::from([("name".to_string(), json!({"contains": "pay"}))]));

		// -- Check
		assert!(matches!(res, Err(Error::InvalidFilter { field }) if field == "name"));
	}

	#[test]
	fn test_conditions_nested_array_err() {
		// -- Exec
		let res = conditions(&FilterMap::from([("id".to_string(), json!([[1], 2]))]));

		// -- Check
		assert!(matches!(res, Err(Error::InvalidFilter { field }) if field == "id"));
	}
}

// endregion: --- Tests
