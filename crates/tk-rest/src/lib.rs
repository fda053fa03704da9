//! # tusk-rest
//!
//! Typed client for the account endpoints of a Mastodon-compatible instance.
//!
//! ## Features
//!
//! - **Lookup** - Fetch an account by ID or the current user
//! - **Social graph** - Followers, following, follow requests
//! - **Moderation** - Follow, block and mute (and their reverses)
//! - **Search** - Account search with an optional result limit
//! - **Relationships** - Follow/block/mute state towards an account
//! - **Statuses** - An account's posts, optionally media-only or without replies
//!
//! ## Example
//!
//! ```rust,ignore
//! use tusk_rest::AccountsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tusk_rest::Error> {
//!     let client = AccountsClient::new("https://mastodon.social", "access_token_here")?;
//!
//!     let me = client.get_current_account().await?;
//!     println!("signed in as {}", me.acct);
//!
//!     for account in client.search_accounts("rustlang", Some(5)).await? {
//!         client.follow_account(account.id).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod router;
mod types;

// Main client
pub use client::AccountsClient;

// Routing
pub use router::{AccountsOptions, Endpoint, ListTarget, SingleTarget};

// Entities
pub use types::{Account, Attachment, Mention, Relationship, Status, Tag};

// Error types
pub use error::{Error, ErrorKind, Result};

// Re-export commonly used types from tusk-client
pub use tusk_client::{ClientConfig, ClientConfigBuilder, InstanceClient};
