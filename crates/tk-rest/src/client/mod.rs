//! Account API client.
//!
//! This client wraps `InstanceClient` from `tk-client` and provides one
//! typed method per account operation.

use serde::de::DeserializeOwned;
use tracing::debug;
use tusk_client::{ClientConfig, InstanceClient, RequestBuilder, RequestMethod};

use crate::error::{Error, Result};
use crate::router::{AccountsOptions, Endpoint, ListTarget, SingleTarget};
use crate::types::Account;

mod accounts;
mod follow_requests;
mod relationships;
mod social;
mod statuses;

/// Account API client.
///
/// Provides typed methods for account operations:
/// - Account lookup and the current user
/// - Follow, block and mute (and their reverses)
/// - Followers, following, blocks, mutes and follow requests
/// - Account search
/// - Relationships and account statuses
///
/// Each method performs exactly one HTTP request.
///
/// # Example
///
/// ```rust,ignore
/// use tusk_rest::AccountsClient;
///
/// let client = AccountsClient::new("https://mastodon.social", "access_token_here")?;
///
/// let me = client.get_current_account().await?;
/// client.follow_account(42).await?;
/// let hits = client.search_accounts("gargron", Some(5)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AccountsClient {
    client: InstanceClient,
}

impl AccountsClient {
    /// Create a new client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = InstanceClient::new(instance_url, access_token)?;
        Ok(Self { client })
    }

    /// Create a new client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = InstanceClient::with_config(instance_url, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a client from `TUSK_INSTANCE_URL` and `TUSK_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let client = InstanceClient::from_env()?;
        Ok(Self { client })
    }

    /// Create a client from an existing InstanceClient.
    pub fn from_client(client: InstanceClient) -> Self {
        Self { client }
    }

    /// Get the underlying InstanceClient.
    pub fn inner(&self) -> &InstanceClient {
        &self.client
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    /// Build an authenticated request for a routed endpoint.
    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.client.api_url(&endpoint.path);
        let request = match endpoint.method {
            RequestMethod::Get => self.client.get(&url),
            RequestMethod::Post => self.client.post(&url),
        };
        request.query_pairs(endpoint.query.iter().cloned())
    }

    /// Send a routed request and decode the body, attaching `operation` to
    /// any failure.
    async fn fetch<T: DeserializeOwned>(&self, operation: &str, endpoint: Endpoint) -> Result<T> {
        debug!(operation, method = %endpoint.method, path = %endpoint.path, "Routing account request");
        self.client
            .send_json(self.request(&endpoint))
            .await
            .map_err(|e| Error::from_client(operation, e))
    }

    /// Single-entity helper: route `target` with an optional ID and decode
    /// one account.
    async fn get_single_account(&self, target: SingleTarget, id: Option<u64>) -> Result<Account> {
        let endpoint = target.endpoint(id)?;
        self.fetch(&format!("account ({target})"), endpoint).await
    }

    /// Multi-entity helper: route `target` with optional options and decode
    /// a list of accounts.
    async fn get_multiple_accounts(
        &self,
        target: ListTarget,
        opts: Option<&AccountsOptions>,
    ) -> Result<Vec<Account>> {
        let endpoint = target.endpoint(opts)?;
        self.fetch(&format!("accounts ({target})"), endpoint).await
    }

    /// Run a single-account target given by its wire name.
    ///
    /// Unknown names fail with `InvalidParameter`.
    pub async fn account_target(&self, target: &str, id: Option<u64>) -> Result<Account> {
        let target: SingleTarget = target.parse()?;
        self.get_single_account(target, id).await
    }

    /// Run an account-list target given by its wire name.
    ///
    /// Unknown names fail with `InvalidParameter`.
    pub async fn accounts_target(
        &self,
        target: &str,
        opts: Option<&AccountsOptions>,
    ) -> Result<Vec<Account>> {
        let target: ListTarget = target.parse()?;
        self.get_multiple_accounts(target, opts).await
    }
}
