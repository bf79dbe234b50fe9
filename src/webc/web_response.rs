use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use bytes::Bytes;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

// region:    --- WebResponse

/// A decoded 2xx reply.
///
/// Serializes as the `{data, status, headers}` envelope extractor pipelines
/// walk, which mirrors the upstream client's response object.
#[derive(Debug, Clone, Serialize)]
pub struct WebResponse {
	#[serde(rename = "data")]
	pub body: ResponseBody,
	pub status: u16,
	pub headers: HashMap<String, String>,
}

impl WebResponse {
	/// The envelope value pipelines reduce over.
	pub fn to_envelope(&self) -> crate::webc::Result<Value> {
		Ok(serde_json::to_value(self)?)
	}
}

// endregion: --- WebResponse

// region:    --- ResponseBody

/// Reply payload in the decoded form the target's `response_type` asked for.
#[derive(Debug, Clone)]
pub enum ResponseBody {
	Json(Value),
	Text(String),
	/// Raw bytes; serialize and convert as standard base64 text.
	Binary(Bytes),
}

impl ResponseBody {
	/// Fold into a plain JSON value for aggregation records.
	#[must_use]
	pub fn into_value(self) -> Value {
		match self {
			ResponseBody::Json(value) => value,
			ResponseBody::Text(text) => Value::String(text),
			ResponseBody::Binary(bytes) => Value::String(BASE64_STANDARD.encode(&bytes)),
		}
	}
}

impl Serialize for ResponseBody {
	fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
		match self {
			ResponseBody::Json(value) => value.serialize(serializer),
			ResponseBody::Text(text) => serializer.serialize_str(text),
			ResponseBody::Binary(bytes) => serializer.serialize_str(&BASE64_STANDARD.encode(bytes)),
		}
	}
}

// endregion: --- ResponseBody

// region:    --- Tests


// endregion: --- Tests
