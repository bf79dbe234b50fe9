use crate::webc::{Error, Result};
use serde_json::Value;

// region:    --- MethodKind

/// Outbound HTTP verb, parsed case-insensitively from configuration strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
	Get,
	Post,
	Put,
	Patch,
	Delete,
}

impl MethodKind {
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			MethodKind::Get => "GET",
			MethodKind::Post => "POST",
			MethodKind::Put => "PUT",
			MethodKind::Patch => "PATCH",
			MethodKind::Delete => "DELETE",
		}
	}

	pub fn from_raw(raw: &str) -> Result<Self> {
		let kind = match raw.trim() {
			m if m.eq_ignore_ascii_case("get") => MethodKind::Get,
			m if m.eq_ignore_ascii_case("post") => MethodKind::Post,
			m if m.eq_ignore_ascii_case("put") => MethodKind::Put,
			m if m.eq_ignore_ascii_case("patch") => MethodKind::Patch,
			m if m.eq_ignore_ascii_case("delete") => MethodKind::Delete,
			_ => return Err(Error::UnsupportedMethod { raw: raw.to_string() }),
		};
		Ok(kind)
	}
}

impl From<MethodKind> for reqwest::Method {
	fn from(kind: MethodKind) -> Self {
		match kind {
			MethodKind::Get => reqwest::Method::GET,
			MethodKind::Post => reqwest::Method::POST,
			MethodKind::Put => reqwest::Method::PUT,
			MethodKind::Patch => reqwest::Method::PATCH,
			MethodKind::Delete => reqwest::Method::DELETE,
		}
	}
}

impl std::fmt::Display for MethodKind {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.write_str(self.as_str())
	}
}

// endregion: --- MethodKind

// region:    --- ResponseKind

/// How the reply body should be decoded.
///
/// Parsing is lenient: unknown or absent `response_type` strings decode as
/// JSON, the dominant case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseKind {
	#[default]
	Json,
	Text,
	Binary,
}

impl ResponseKind {
	#[must_use]
	pub fn from_raw(raw: Option<&str>) -> Self {
		match raw.map(str::trim) {
			Some(r) if r.eq_ignore_ascii_case("text") => ResponseKind::Text,
			Some(r)
				if r.eq_ignore_ascii_case("arraybuffer")
					|| r.eq_ignore_ascii_case("binary")
					|| r.eq_ignore_ascii_case("blob")
					|| r.eq_ignore_ascii_case("stream") =>
			{
				ResponseKind::Binary
			}
			_ => ResponseKind::Json,
		}
	}
}

// endregion: --- ResponseKind

// region:    --- WebRequest

/// A fully-described outbound call.
///
/// Everything is plain data so authentication strategies can decorate the
/// request before dispatch and tests can assert on it without a network.
#[derive(Debug, Clone)]
pub struct WebRequest {
	pub method: MethodKind,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub query: Vec<(String, String)>,
	pub body: Option<Value>,
	/// Form-encoded payload; takes precedence over `body` when set.
	pub form: Option<Vec<(String, String)>>,
	pub response_kind: ResponseKind,
}

/// Constructors
impl WebRequest {
	pub fn new(method: MethodKind, url: impl Into<String>) -> Self {
		Self {
			method,
			url: url.into(),
			headers: Vec::new(),
			query: Vec::new(),
			body: None,
			form: None,
			response_kind: ResponseKind::default(),
		}
	}
}

/// Chainable Setters
impl WebRequest {
	#[must_use]
	pub fn with_body(mut self, body: Value) -> Self {
		self.body = Some(body);
		self
	}

	#[must_use]
	pub fn with_form(mut self, form: Vec<(String, String)>) -> Self {
		self.form = Some(form);
		self
	}

	#[must_use]
	pub fn with_response_kind(mut self, response_kind: ResponseKind) -> Self {
		self.response_kind = response_kind;
		self
	}
}

/// Setters
impl WebRequest {
	pub fn push_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.headers.push((name.into(), value.into()));
	}

	pub fn push_query(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.query.push((name.into(), value.into()));
	}
}

// endregion: --- WebRequest

// region:    --- Template Maps

/// Flatten a configured template map (query parameters or headers) to pairs.
///
/// Only flat objects of scalars are accepted; null entries are dropped the way
/// the upstream client dropped them. `field` names the offending parameter in
/// the error.
pub fn template_pairs(map: &Value, field: &'static str) -> Result<Vec<(String, String)>> {
	let Value::Object(entries) = map else {
		return Err(Error::InvalidTemplate { field });
	};

	let mut pairs = Vec::with_capacity(entries.len());
	for (name, value) in entries {
		let rendered = match value {
			Value::Null => continue,
			Value::String(s) => s.clone(),
			Value::Bool(b) => b.to_string(),
			Value::Number(n) => n.to_string(),
			Value::Array(_) | Value::Object(_) => return Err(Error::InvalidTemplate { field }),
		};
		pairs.push((name.clone(), rendered));
	}
	Ok(pairs)
}

// endregion: --- Template Maps

// region:    --- Tests


// endregion: --- Tests
