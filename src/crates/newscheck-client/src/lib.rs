//! Typed HTTP client for the newscheck prediction service.
//!
//! This crate wraps the service's REST endpoints in a typed API:
//!
//! - **Predict** - `POST {base}/api/v1/predict` classifies a piece of news
//!   and returns a [`PredictionRecord`](newscheck_core::PredictionRecord)
//! - **History** - `GET {base}/api/v1/history?limit=N` returns the most
//!   recent records, newest first
//! - **Health** - `GET {base}/api/v1/health` reports whether the model is
//!   loaded
//!
//! # Example
//!
//! ```rust,ignore
//! use newscheck_client::{ApiClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ClientConfig::from_env());
//!
//!     let record = client
//!         .predict(Some("Markets Rally"), "Stocks rallied today on...")
//!         .await?;
//!     println!("{} ({})", record.label, record.probability);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use client::{ApiClient, HealthStatus};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
