use crate::batch::TargetRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `DD-MM-YYYY HH:mm:ss` in UTC, the timestamp format every envelope and
/// record carries.
#[must_use]
pub fn utc_timestamp() -> String {
	Utc::now().format("%d-%m-%Y %H:%M:%S").to_string()
}

// region:    --- BatchResponse

/// Whole-batch outcome: an HTTP-ish status plus the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
	/// 200 when the batch ran (individual targets may still have failed),
	/// 500 when the batch itself could not run.
	pub status: u16,
	pub data: BatchData,
}

impl BatchResponse {
	pub(crate) fn success(records: HashMap<String, TargetRecord>, timestamp: String) -> Self {
		Self {
			status: 200,
			data: BatchData::Success(BatchSuccess {
				timestamp,
				status: true,
				status_code: 200,
				data: records,
			}),
		}
	}

	/// The 500-class envelope for a batch that could not run.
	#[must_use]
	pub fn failure(failure: BatchFailure) -> Self {
		Self {
			status: 500,
			data: BatchData::Failure(failure),
		}
	}

	/// The per-target record map, when the batch ran.
	#[must_use]
	pub fn records(&self) -> Option<&HashMap<String, TargetRecord>> {
		match &self.data {
			BatchData::Success(success) => Some(&success.data),
			BatchData::Failure(_) => None,
		}
	}
}

// endregion: --- BatchResponse

// region:    --- BatchData

/// Envelope payload; field shape, not a tag, tells the two apart on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchData {
	Success(BatchSuccess),
	Failure(BatchFailure),
}

/// Payload of a batch that ran: one record per target name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSuccess {
	pub timestamp: String,
	/// Always `true`.
	pub status: bool,
	pub status_code: u16,
	pub data: HashMap<String, TargetRecord>,
}

/// Payload of a batch that could not run (descriptor query failure or an
/// invalid filter). Generic texts only — the cause goes to the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
	pub timestamp: String,
	/// Always `false`.
	pub status: bool,
	pub status_code: u16,
	pub message: String,
	pub suggestion: String,
}

impl BatchFailure {
	pub const MESSAGE: &str = "Something went wrong.";
	pub const SUGGESTION: &str = "Please try again later. If this issue persists, contact our support team for assistance.";

	#[must_use]
	pub fn generic() -> Self {
		Self {
			timestamp: utc_timestamp(),
			status: false,
			status_code: 500,
			message: Self::MESSAGE.to_string(),
			suggestion: Self::SUGGESTION.to_string(),
		}
	}
}

impl Default for BatchFailure {
	fn default() -> Self {
		Self::generic()
	}
}

// endregion: --- BatchData

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

	use super::*;

	#[test]
	fn test_envelope_failure_shape_ok() -> Result<()> {
		// -- Exec
		let response = BatchResponse::failure(BatchFailure::generic());
		let value = serde_json::to_value(&response)?;

		// -- Check
		assert_eq!(value["status"], 500);
		assert_eq!(value["data"]["statusCode"], 500);
		assert_eq!(value["data"]["status"], false);
		assert_eq!(value["data"]["message"], "Something went wrong.");
		assert!(response.records().is_none());

		Ok(())
	}

	#[test]
	fn test_utc_timestamp_format_ok() -> Result<()> {
		// -- Exec
		let timestamp = utc_timestamp();

		// -- Check
		// DD-MM-YYYY HH:mm:ss
		chrono::NaiveDateTime::parse_from_str(&timestamp, "%d-%m-%Y %H:%M:%S")?;

		Ok(())
	}
}

// endregion: --- Tests
