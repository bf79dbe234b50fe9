use serde_json::Value;

/// An ordered property path reduced over a response envelope to pull out a
/// token or expiration value.
///
/// Each step reads the named property of the accumulator; on an array
/// accumulator a numeric step indexes into it. A step whose property is
/// absent or null leaves the accumulator unchanged — extraction never fails,
/// it just stops narrowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extractor {
	steps: Vec<String>,
}

impl Extractor {
	pub fn new(steps: impl Into<Vec<String>>) -> Self {
		Self { steps: steps.into() }
	}

	/// Reduce the pipeline over `envelope` and return where it landed.
	#[must_use]
	pub fn extract<'a>(&self, envelope: &'a Value) -> &'a Value {
		self.steps
			.iter()
			.fold(envelope, |accumulator, step| step_value(accumulator, step).unwrap_or(accumulator))
	}
}

fn step_value<'a>(accumulator: &'a Value, step: &str) -> Option<&'a Value> {
	let value = match accumulator {
		Value::Array(items) => step.parse::<usize>().ok().and_then(|index| items.get(index))?,
		other => other.get(step)?,
	};
	// Null is treated like absence: the step is a no-op.
	(!value.is_null()).then_some(value)
}

// region:    --- Tests


// endregion: --- Tests
