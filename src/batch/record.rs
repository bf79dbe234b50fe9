use crate::resolver::EffectiveParams;
use crate::target::TargetDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// region:    --- TargetRecord

/// Outcome of one target inside a batch — exactly one record per target name.
///
/// On the wire the two shapes are distinguished by their fields (`data`
/// versus `message`/`suggestion`), not by a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetRecord {
	Success(SuccessRecord),
	Error(ErrorRecord),
}

impl TargetRecord {
	#[must_use]
	pub fn is_success(&self) -> bool {
		matches!(self, TargetRecord::Success(_))
	}

	#[must_use]
	pub fn name(&self) -> &str {
		match self {
			TargetRecord::Success(record) => &record.name,
			TargetRecord::Error(record) => &record.name,
		}
	}

	/// The effective parameter echo both record shapes carry.
	#[must_use]
	pub fn params(&self) -> &EffectiveParams {
		match self {
			TargetRecord::Success(record) => &record.params,
			TargetRecord::Error(record) => &record.params,
		}
	}
}

// endregion: --- TargetRecord

// region:    --- SuccessRecord

/// A target that resolved, authenticated and answered 2xx.
///
/// Echoes the effective parameters so a reader can tell which values actually
/// drove the call after overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRecord {
	pub timestamp: String,
	/// Always `true`.
	pub status: bool,
	pub id: i64,
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub group_name: Option<String>,
	#[serde(flatten)]
	pub params: EffectiveParams,
	pub is_api_active: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
	/// The decoded reply payload.
	pub data: Value,
}

impl SuccessRecord {
	#[must_use]
	pub fn new(timestamp: String, descriptor: &TargetDescriptor, params: EffectiveParams, data: Value) -> Self {
		Self {
			timestamp,
			status: true,
			id: descriptor.id,
			name: descriptor.name.clone(),
			group_name: descriptor.group_name.clone(),
			params,
			is_api_active: descriptor.is_api_active,
			created_at: descriptor.created_at,
			updated_at: descriptor.updated_at,
			data,
		}
	}
}

// endregion: --- SuccessRecord

// region:    --- ErrorRecord

/// A target whose processing failed at any stage — resolution gaps,
/// decryption, token acquisition or the request itself.
///
/// The texts are deliberately generic; the specific cause goes to the log,
/// not to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
	pub timestamp: String,
	/// Always `false`.
	pub status: bool,
	pub id: i64,
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub group_name: Option<String>,
	#[serde(flatten)]
	pub params: EffectiveParams,
	pub is_api_active: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
	pub message: String,
	pub suggestion: String,
}

impl ErrorRecord {
	pub const MESSAGE: &str = "Unexpected error occurred while processing the data.";
	pub const SUGGESTION: &str = "Please try again later. If this issue persists, contact our support team for assistance.";

	#[must_use]
	pub fn new(timestamp: String, descriptor: &TargetDescriptor, params: EffectiveParams) -> Self {
		Self {
			timestamp,
			status: false,
			id: descriptor.id,
			name: descriptor.name.clone(),
			group_name: descriptor.group_name.clone(),
			params,
			is_api_active: descriptor.is_api_active,
			created_at: descriptor.created_at,
			updated_at: descriptor.updated_at,
			message: Self::MESSAGE.to_string(),
			suggestion: Self::SUGGESTION.to_string(),
		}
	}
}

// endregion: --- ErrorRecord

// region:    --- Tests


// endregion: --- Tests
