//! Authenticated multi-target API fan-out and aggregation.
//!
//! The engine reads registered target descriptors from a [`store`], resolves
//! each target's parameters through a three-tier override hierarchy
//! ([`resolver`]), constructs the authentication strategy the target declares
//! ([`auth`], decrypting stored credentials via [`secrets`]), executes the
//! call ([`webc`]) and folds every outcome into one name-keyed record map
//! ([`batch`]). One bad target never takes the batch down.
//!
//! ```rust,no_run
//! use apifan::batch::{Aggregator, BatchRequest};
//! use apifan::secrets::SecretsConfig;
//! use apifan::store::MemoryStore;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! 	let store = MemoryStore::default();
//! 	let aggregator = Aggregator::builder(store)
//! 		.with_secrets(SecretsConfig::from_env("APIS"))
//! 		.build();
//!
//! 	let request = BatchRequest::default().with_filter("group_name", json!("payments"));
//! 	let response = aggregator.exec_batch(&request).await?;
//! 	println!("{}", serde_json::to_string_pretty(&response)?);
//! 	Ok(())
//! }
//! ```

// region:    --- Modules

mod error;

pub use error::{Error, Result};

pub mod auth;
pub mod batch;
pub mod resolver;
pub mod secrets;
pub mod store;
pub mod target;
pub mod webc;

// -- Flatten the main surface
pub use batch::{Aggregator, BatchRequest, BatchResponse};

// endregion: --- Modules
