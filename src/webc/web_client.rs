use crate::webc::{Error, ResponseBody, ResponseKind, Result, WebRequest, WebResponse};
use serde_json::Value;
use std::collections::HashMap;

/// Shared HTTP executor.
///
/// One instance serves every target of a batch; the inner reqwest client is
/// pooled and clone-cheap. The executor itself holds no authentication state.
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

/// Constructors
impl WebClient {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		Self { reqwest_client }
	}
}

/// Execute
impl WebClient {
	/// Dispatch one described request and decode the reply.
	///
	/// Any non-2xx status is an error carrying the reply text, so a target
	/// that answers with a failure page never produces a success record.
	pub async fn execute(&self, request: &WebRequest) -> Result<WebResponse> {
		tracing::debug!(method = %request.method, url = %request.url, "executing web request");

		let mut req_builder = self.reqwest_client.request(request.method.into(), &request.url);

		if !request.query.is_empty() {
			req_builder = req_builder.query(&request.query);
		}
		for (name, value) in &request.headers {
			req_builder = req_builder.header(name, value);
		}
		if let Some(form) = &request.form {
			req_builder = req_builder.form(form);
		} else if let Some(body) = &request.body {
			req_builder = req_builder.json(body);
		}

		let response = req_builder.send().await?;

		let status = response.status();
		let headers = header_map(&response);

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(Error::ResponseFailedStatus {
				status: status.as_u16(),
				body,
			});
		}

		let body = match request.response_kind {
			// Lenient decode: a reply that is not valid JSON stays raw text,
			// the way the upstream client behaved.
			ResponseKind::Json => {
				let text = response.text().await?;
				match serde_json::from_str::<Value>(&text) {
					Ok(value) => ResponseBody::Json(value),
					Err(_) => ResponseBody::Text(text),
				}
			}
			ResponseKind::Text => ResponseBody::Text(response.text().await?),
			ResponseKind::Binary => ResponseBody::Binary(response.bytes().await?),
		};

		Ok(WebResponse {
			body,
			status: status.as_u16(),
			headers,
		})
	}
}

fn header_map(response: &reqwest::Response) -> HashMap<String, String> {
	response
		.headers()
		.iter()
		.filter_map(|(name, value)| {
			let value = value.to_str().ok()?;
			Some((name.as_str().to_string(), value.to_string()))
		})
		.collect()
}
