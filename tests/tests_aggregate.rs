//! End-to-end batch tests: seeded store, mock upstreams, full fan-out.

mod support;

use crate::support::{Result, seed_ciphertext, seed_descriptor, seed_secrets};
use apifan::batch::TargetRecord;
use apifan::store::MemoryStore;
use apifan::{Aggregator, BatchRequest, BatchResponse};
use httpmock::prelude::*;
use serde_json::json;

// region:    --- Mixed Batch

#[tokio::test]
async fn test_aggregate_mixed_batch_isolates_failures_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let alpha_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/alpha").header("x-api-key", "key-123");
			then.status(200).json_body(json!({"region": "eu"}));
		})
		.await;
	let beta_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/beta");
			then.status(200).body("plain-beta");
		})
		.await;
	let gamma_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/gamma");
			then.status(200).json_body(json!({"never": "seen"}));
		})
		.await;

	let mut alpha = seed_descriptor(1, "alpha", &server.url("/alpha"));
	alpha.authentication_type = Some("API Key".to_string());
	alpha.api_key_authentication_key = Some(seed_ciphertext("key-123")?);
	alpha.api_key_authentication_header_name = Some("x-api-key".to_string());

	let mut beta = seed_descriptor(2, "beta", &server.url("/beta"));
	beta.response_type = "text".to_string();

	// Undecryptable credential: this target must fail before any call.
	let mut gamma = seed_descriptor(3, "gamma", &server.url("/gamma"));
	gamma.authentication_type = Some("Bearer".to_string());
	gamma.bearer_authentication_token = Some(b"!!not-base64!!".to_vec());

	let aggregator = Aggregator::builder(MemoryStore::new(vec![alpha, beta, gamma]))
		.with_secrets(seed_secrets())
		.build();

	// -- Exec
	let response = aggregator.exec_batch(&BatchRequest::default()).await?;

	// -- Check
	assert_eq!(response.status, 200);
	let records = response.records().ok_or("batch should have run")?;
	assert_eq!(records.len(), 3);

	let TargetRecord::Success(alpha_record) = records.get("alpha").ok_or("alpha record missing")? else {
		return Err("alpha should be a success record".into());
	};
	assert_eq!(alpha_record.data, json!({"region": "eu"}));

	let TargetRecord::Success(beta_record) = records.get("beta").ok_or("beta record missing")? else {
		return Err("beta should be a success record".into());
	};
	assert_eq!(beta_record.data, json!("plain-beta"));

	let TargetRecord::Error(gamma_record) = records.get("gamma").ok_or("gamma record missing")? else {
		return Err("gamma should be an error record".into());
	};
	assert_eq!(gamma_record.message, "Unexpected error occurred while processing the data.");
	assert_eq!(
		gamma_record.suggestion,
		"Please try again later. If this issue persists, contact our support team for assistance."
	);
	// The error record still echoes the resolved parameters.
	assert_eq!(gamma_record.params.authentication_type.as_deref(), Some("Bearer"));

	alpha_mock.assert_async().await;
	beta_mock.assert_async().await;
	assert_eq!(gamma_mock.hits_async().await, 0);

	Ok(())
}

#[tokio::test]
async fn test_aggregate_non_success_status_is_error_record_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/down");
			then.status(500).body("upstream exploded");
		})
		.await;

	let aggregator = Aggregator::builder(MemoryStore::new(vec![seed_descriptor(
		1,
		"down",
		&server.url("/down"),
	)]))
	.build();

	// -- Exec
	let response = aggregator.exec_batch(&BatchRequest::default()).await?;

	// -- Check
	// The batch itself still runs; the 5xx answer costs one error record.
	assert_eq!(response.status, 200);
	let records = response.records().ok_or("batch should have run")?;
	let record = records.get("down").ok_or("down record missing")?;
	assert!(!record.is_success());

	Ok(())
}

#[tokio::test]
async fn test_aggregate_inactive_target_still_called_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/dormant");
			then.status(200).json_body(json!({"ok": true}));
		})
		.await;

	let mut dormant = seed_descriptor(1, "dormant", &server.url("/dormant"));
	dormant.is_api_active = false;

	let aggregator = Aggregator::builder(MemoryStore::new(vec![dormant])).build();

	// -- Exec
	let response = aggregator.exec_batch(&BatchRequest::default()).await?;

	// -- Check
	// The flag is echoed, never implicitly filtered on.
	let records = response.records().ok_or("batch should have run")?;
	let TargetRecord::Success(record) = records.get("dormant").ok_or("dormant record missing")? else {
		return Err("dormant should be a success record".into());
	};
	assert!(!record.is_api_active);
	mock.assert_async().await;

	Ok(())
}

#[tokio::test]
async fn test_aggregate_duplicate_name_last_wins_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let first_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/first");
			then.status(200).json_body(json!({"v": 1}));
		})
		.await;
	let second_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/second");
			then.status(200).json_body(json!({"v": 2}));
		})
		.await;

	let aggregator = Aggregator::builder(MemoryStore::new(vec![
		seed_descriptor(1, "dup", &server.url("/first")),
		seed_descriptor(2, "dup", &server.url("/second")),
	]))
	.build();

	// -- Exec
	let response = aggregator.exec_batch(&BatchRequest::default()).await?;

	// -- Check
	// Both targets are processed; the record map keeps the later one.
	assert_eq!(first_mock.hits_async().await, 1);
	assert_eq!(second_mock.hits_async().await, 1);
	let records = response.records().ok_or("batch should have run")?;
	assert_eq!(records.len(), 1);
	let TargetRecord::Success(record) = records.get("dup").ok_or("dup record missing")? else {
		return Err("dup should be a success record".into());
	};
	assert_eq!(record.data, json!({"v": 2}));

	Ok(())
}

#[tokio::test]
async fn test_aggregate_reruns_are_isolated_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/steady");
			then.status(200).json_body(json!({"tick": 1}));
		})
		.await;

	let aggregator = Aggregator::builder(MemoryStore::new(vec![seed_descriptor(
		1,
		"steady",
		&server.url("/steady"),
	)]))
	.build();
	let request = BatchRequest::default();

	// -- Exec
	let first = aggregator.exec_batch(&request).await?;
	let second = aggregator.exec_batch(&request).await?;

	// -- Check
	// Nothing carries over between runs except the shared clients.
	assert_eq!(mock.hits_async().await, 2);
	let first_records = first.records().ok_or("first batch should have run")?;
	let second_records = second.records().ok_or("second batch should have run")?;
	let TargetRecord::Success(first_record) = first_records.get("steady").ok_or("record missing")? else {
		return Err("steady should be a success record".into());
	};
	let TargetRecord::Success(second_record) = second_records.get("steady").ok_or("record missing")? else {
		return Err("steady should be a success record".into());
	};
	assert_eq!(first_record.data, second_record.data);
	assert_eq!(
		serde_json::to_value(&first_record.params)?,
		serde_json::to_value(&second_record.params)?
	);

	Ok(())
}

// endregion: --- Mixed Batch

// region:    --- Overrides On The Wire

#[tokio::test]
async fn test_aggregate_overrides_shape_the_call_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let stored_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1");
			then.status(200).json_body(json!({"from": "v1"}));
		})
		.await;
	let override_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2").query_param("env", "staging");
			then.status(200).json_body(json!({"from": "v2"}));
		})
		.await;

	let billing = seed_descriptor(1, "billing", &server.url("/v1"));
	let aggregator = Aggregator::builder(MemoryStore::new(vec![billing])).build();

	let request: BatchRequest = serde_json::from_value(json!({
		"globalOverrideMap": {
			"query_parameter_map": {"env": "staging"}
		},
		"perTargetOverrideMap": {
			"billing": {"url": server.url("/v2")}
		}
	}))?;

	// -- Exec
	let response = aggregator.exec_batch(&request).await?;

	// -- Check
	assert_eq!(stored_mock.hits_async().await, 0);
	override_mock.assert_async().await;

	let records = response.records().ok_or("batch should have run")?;
	let TargetRecord::Success(record) = records.get("billing").ok_or("billing record missing")? else {
		return Err("billing should be a success record".into());
	};
	assert_eq!(record.data, json!({"from": "v2"}));
	// The echo reports the values that actually drove the call.
	assert_eq!(record.params.url.as_deref(), Some(server.url("/v2").as_str()));
	assert_eq!(record.params.query_parameter_map, Some(json!({"env": "staging"})));

	Ok(())
}

#[tokio::test]
async fn test_aggregate_nulled_url_is_one_error_record_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/fine");
			then.status(200).json_body(json!({"ok": true}));
		})
		.await;

	let aggregator = Aggregator::builder(MemoryStore::new(vec![
		seed_descriptor(1, "broken", &server.url("/fine")),
		seed_descriptor(2, "fine", &server.url("/fine")),
	]))
	.build();

	// An explicit null leaves the target without a URL; only that target fails.
	let request: BatchRequest = serde_json::from_value(json!({
		"perTargetOverrideMap": {
			"broken": {"url": null}
		}
	}))?;

	// -- Exec
	let response = aggregator.exec_batch(&request).await?;

	// -- Check
	let records = response.records().ok_or("batch should have run")?;
	assert!(!records.get("broken").ok_or("broken record missing")?.is_success());
	assert!(records.get("fine").ok_or("fine record missing")?.is_success());
	assert_eq!(mock.hits_async().await, 1);

	Ok(())
}

// endregion: --- Overrides On The Wire

// region:    --- Filters

#[tokio::test]
async fn test_aggregate_filter_membership_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let selected_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/any");
			then.status(200).json_body(json!({"ok": true}));
		})
		.await;

	let aggregator = Aggregator::builder(MemoryStore::new(vec![
		seed_descriptor(1, "alpha", &server.url("/any")),
		seed_descriptor(2, "beta", &server.url("/any")),
		seed_descriptor(3, "gamma", &server.url("/any")),
	]))
	.build();

	let request = BatchRequest::default().with_filter("id", json!([1, 3]));

	// -- Exec
	let response = aggregator.exec_batch(&request).await?;

	// -- Check
	let records = response.records().ok_or("batch should have run")?;
	assert_eq!(records.len(), 2);
	assert!(records.contains_key("alpha"));
	assert!(records.contains_key("gamma"));
	assert_eq!(selected_mock.hits_async().await, 2);

	Ok(())
}

#[tokio::test]
async fn test_aggregate_invalid_filter_fails_batch_err() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/any");
			then.status(200).json_body(json!({"ok": true}));
		})
		.await;

	let aggregator = Aggregator::builder(MemoryStore::new(vec![seed_descriptor(1, "alpha", &server.url("/any"))]))
		.build();

	let request = BatchRequest::default().with_filter("name", json!({"contains": "al"}));

	// -- Exec
	let res = aggregator.exec_batch(&request).await;

	// -- Check
	// Malformed caller input fails the whole batch; no target runs.
	let Err(err) = res else {
		return Err("object filter value should fail the batch".into());
	};
	assert!(matches!(
		err,
		apifan::Error::Store(apifan::store::Error::InvalidFilter { .. })
	));
	assert_eq!(mock.hits_async().await, 0);

	// The caller-facing envelope carries only the generic texts.
	let failure = BatchResponse::failure(err.to_failure());
	let value = serde_json::to_value(&failure)?;
	assert_eq!(value["status"], 500);
	assert_eq!(value["data"]["statusCode"], 500);
	assert_eq!(value["data"]["status"], false);
	assert_eq!(value["data"]["message"], "Something went wrong.");

	Ok(())
}

#[tokio::test]
async fn test_aggregate_unknown_filter_field_err() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let aggregator = Aggregator::builder(MemoryStore::new(vec![seed_descriptor(1, "alpha", &server.url("/any"))]))
		.build();

	let request = BatchRequest::default().with_filter("tier", json!("gold"));

	// -- Exec
	let res = aggregator.exec_batch(&request).await;

	// -- Check
	assert!(matches!(
		res,
		Err(apifan::Error::Store(apifan::store::Error::UnknownField { ref field })) if field == "tier"
	));

	Ok(())
}

// endregion: --- Filters

// region:    --- Envelope Shape

#[tokio::test]
async fn test_aggregate_envelope_wire_shape_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/alpha");
			then.status(200).json_body(json!({"region": "eu"}));
		})
		.await;

	let mut alpha = seed_descriptor(1, "alpha", &server.url("/alpha"));
	alpha.group_name = Some("edge".to_string());

	let aggregator = Aggregator::builder(MemoryStore::new(vec![alpha])).build();

	// -- Exec
	let response = aggregator.exec_batch(&BatchRequest::default()).await?;
	let value = serde_json::to_value(&response)?;

	// -- Check
	assert_eq!(value["status"], 200);
	assert_eq!(value["data"]["status"], true);
	assert_eq!(value["data"]["statusCode"], 200);
	let timestamp = value["data"]["timestamp"].as_str().ok_or("timestamp missing")?;
	chrono::NaiveDateTime::parse_from_str(timestamp, "%d-%m-%Y %H:%M:%S")?;

	let record = &value["data"]["data"]["alpha"];
	assert_eq!(record["status"], true);
	assert_eq!(record["id"], 1);
	assert_eq!(record["name"], "alpha");
	assert_eq!(record["groupName"], "edge");
	// Resolved parameters are flattened into the record with camel-cased keys.
	assert_eq!(record["methodType"], "get");
	assert_eq!(record["responseType"], "json");
	assert_eq!(record["url"], server.url("/alpha"));
	assert_eq!(record["isApiActive"], true);
	assert_eq!(record["data"], json!({"region": "eu"}));

	Ok(())
}

// endregion: --- Envelope Shape
