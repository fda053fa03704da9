//! # tk-client
//!
//! Core HTTP client infrastructure for Mastodon-compatible instance APIs.
//!
//! This crate provides the foundational HTTP client with:
//! - Compression support (gzip, deflate)
//! - Connection pooling
//! - Bearer token authentication
//! - Uniform decoding of error envelopes (`{"error": "..."}`)
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (tk-rest: accounts, relationships, statuses)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   InstanceClient                            │
//! │  - Holds instance URL, access token + HTTP client           │
//! │  - Builds `/api/v1` URLs                                    │
//! │  - Two-stage decode: error envelope, then expected type     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HttpClient                               │
//! │  - Raw HTTP with compression and tracing                    │
//! │  - Request building                                         │
//! │  - Response handling                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use tusk_client::InstanceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tusk_client::Error> {
//!     let client = InstanceClient::new("https://mastodon.social", "token")?;
//!
//!     let me: serde_json::Value = client
//!         .send_json(client.get(&client.api_url("accounts/verify_credentials")))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod instance_client;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder, PoolConfig};
pub use error::{Error, ErrorKind, Result};
pub use instance_client::InstanceClient;
pub use request::{RequestBuilder, RequestMethod};
pub use response::{decode_body, ErrorEnvelope, Response};

/// Default path prefix of the instance REST API.
pub const DEFAULT_API_PREFIX: &str = "api/v1";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("tusk-api/", env!("CARGO_PKG_VERSION"));
