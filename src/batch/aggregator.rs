use crate::auth::AuthStrategy;
use crate::batch::{BatchRequest, BatchResponse, ErrorRecord, SuccessRecord, TargetRecord, utc_timestamp};
use crate::resolver::EffectiveParams;
use crate::secrets::{CredentialVault, SecretsConfig};
use crate::store::DescriptorStore;
use crate::target::TargetDescriptor;
use crate::webc::{MethodKind, ResponseKind, WebClient, WebRequest, template_pairs};
use crate::{Result, webc};
use futures::future::join_all;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

// region:    --- Aggregator

/// The batch engine: descriptor query, per-target fan-out, record map.
///
/// Cheap to clone; the store, vault and web client are shared.
#[derive(Clone)]
pub struct Aggregator {
	store: Arc<dyn DescriptorStore>,
	vault: CredentialVault,
	webc: WebClient,
}

/// Constructors
impl Aggregator {
	pub fn builder(store: impl DescriptorStore + 'static) -> AggregatorBuilder {
		AggregatorBuilder::new(Arc::new(store))
	}
}

/// Exec
impl Aggregator {
	/// Run one batch: query descriptors, process every target concurrently,
	/// and fold the outcomes into a name-keyed record map.
	///
	/// Target failures never surface here — they become error records. An
	/// `Err` means the batch itself could not run (descriptor query or filter
	/// failure); [`BatchResponse::failure`] builds the matching envelope.
	pub async fn exec_batch(&self, request: &BatchRequest) -> Result<BatchResponse> {
		let timestamp = utc_timestamp();

		let descriptors = self.store.query(request.filter_map.as_ref()).await?;
		tracing::debug!(targets = descriptors.len(), "aggregating batch");

		let entries = join_all(
			descriptors
				.iter()
				.map(|descriptor| self.process_target(descriptor, request)),
		)
		.await;

		// On duplicate names the later entry wins.
		let records: HashMap<String, TargetRecord> = entries.into_iter().collect();

		Ok(BatchResponse::success(records, timestamp))
	}

	/// Process one target end to end. Infallible by design: every failure
	/// inside the boundary folds into the error record.
	async fn process_target(&self, descriptor: &TargetDescriptor, request: &BatchRequest) -> (String, TargetRecord) {
		let timestamp = utc_timestamp();
		let local = request.per_target_override_map.get(&descriptor.name);
		let params = EffectiveParams::resolve(descriptor, request.global_override_map.as_ref(), local);

		match self.invoke(&params).await {
			Ok(data) => (
				descriptor.name.clone(),
				TargetRecord::Success(SuccessRecord::new(timestamp, descriptor, params, data)),
			),
			Err(err) => {
				tracing::error!(target = %descriptor.name, error = %err, "target processing failed");
				(
					descriptor.name.clone(),
					TargetRecord::Error(ErrorRecord::new(timestamp, descriptor, params)),
				)
			}
		}
	}

	/// The fallible per-target pipeline: strategy, request, execution.
	async fn invoke(&self, params: &EffectiveParams) -> Result<Value> {
		let mut strategy = AuthStrategy::from_params(params, &self.vault)?;
		let mut request = build_request(params)?;

		strategy.apply(&self.webc, &mut request).await?;
		let response = self.webc.execute(&request).await?;

		Ok(response.body.into_value())
	}
}

impl std::fmt::Debug for Aggregator {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("Aggregator").finish_non_exhaustive()
	}
}

// endregion: --- Aggregator

// region:    --- Request Build

/// Build the primary request from resolved parameters.
///
/// Method and URL are hard requirements; an override that nulled either one
/// makes the target unexecutable for this invocation.
fn build_request(params: &EffectiveParams) -> webc::Result<WebRequest> {
	let method_raw = params
		.method_type
		.as_deref()
		.ok_or(webc::Error::MissingRequestField { field: "method_type" })?;
	let url = params.url.clone().ok_or(webc::Error::MissingRequestField { field: "url" })?;

	let mut request = WebRequest::new(MethodKind::from_raw(method_raw)?, url)
		.with_response_kind(ResponseKind::from_raw(params.response_type.as_deref()));

	if let Some(map) = &params.query_parameter_map {
		request.query = template_pairs(map, "query_parameter_map")?;
	}
	if let Some(map) = &params.header_map {
		request.headers = template_pairs(map, "header_map")?;
	}
	request.body = params.body.clone();

	Ok(request)
}

// endregion: --- Request Build

// region:    --- AggregatorBuilder

/// Builder pattern for [`Aggregator`]. The store is the one required piece;
/// secrets and web client fall back to empty defaults.
pub struct AggregatorBuilder {
	store: Arc<dyn DescriptorStore>,
	secrets: Option<SecretsConfig>,
	webc: Option<WebClient>,
}

impl AggregatorBuilder {
	pub fn new(store: Arc<dyn DescriptorStore>) -> Self {
		Self {
			store,
			secrets: None,
			webc: None,
		}
	}

	#[must_use]
	pub fn with_secrets(mut self, config: SecretsConfig) -> Self {
		self.secrets = Some(config);
		self
	}

	#[must_use]
	pub fn with_web_client(mut self, webc: WebClient) -> Self {
		self.webc = Some(webc);
		self
	}

	#[must_use]
	pub fn build(self) -> Aggregator {
		Aggregator {
			store: self.store,
			vault: CredentialVault::new(self.secrets.unwrap_or_default()),
			webc: self.webc.unwrap_or_default(),
		}
	}
}

// endregion: --- AggregatorBuilder

// region:    --- Tests


// endregion: --- Tests
