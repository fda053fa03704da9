//! # tusk-api
//!
//! A client library for the account API of Mastodon-compatible instances.
//!
//! The library gives typed access to account lookup, the social graph,
//! moderation actions, search, relationships and account statuses. Every
//! call maps to one HTTP request; server error envelopes surface verbatim.
//!
//! ## Security
//!
//! - The access token is redacted in Debug output
//! - Tracing spans skip the token
//! - Error messages echoing response bodies strip bearer tokens and secrets
//!
//! ## Crates
//!
//! - **tusk-client** - HTTP transport: configuration, request building,
//!   error-envelope probing and response decoding
//! - **tusk-rest** - Account API: routing, entity types, typed operations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tusk_api::AccountsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads TUSK_INSTANCE_URL and TUSK_ACCESS_TOKEN
//!     let client = AccountsClient::from_env()?;
//!
//!     let me = client.get_current_account().await?;
//!     for follower in client.get_account_followers(me.id).await? {
//!         println!("{}", follower.acct);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use tusk_client as client;
#[cfg(feature = "rest")]
pub use tusk_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use tusk_client::{ClientConfig, InstanceClient};
#[cfg(feature = "rest")]
pub use tusk_rest::{Account, AccountsClient, Relationship, Status};
