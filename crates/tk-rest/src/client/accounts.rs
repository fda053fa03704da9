use tracing::instrument;
use tusk_client::RequestMethod;

use crate::error::{Error, ErrorKind, Result};
use crate::router::{AccountsOptions, Endpoint, ListTarget, SingleTarget};
use crate::types::Account;

impl super::AccountsClient {
    /// Get an account by ID.
    ///
    /// A decoded account with ID zero is reported as `EntityNotFound`.
    #[instrument(skip(self))]
    pub async fn get_account(&self, id: u64) -> Result<Account> {
        let account = self.get_single_account(SingleTarget::Account, Some(id)).await?;
        found(account)
    }

    /// Get the account of the token owner.
    #[instrument(skip(self))]
    pub async fn get_current_account(&self) -> Result<Account> {
        let account = self
            .get_single_account(SingleTarget::VerifyCredentials, None)
            .await?;
        found(account)
    }

    /// List the accounts following `account_id`.
    #[instrument(skip(self))]
    pub async fn get_account_followers(&self, account_id: u64) -> Result<Vec<Account>> {
        let opts = AccountsOptions::for_account(account_id);
        self.get_multiple_accounts(ListTarget::Followers, Some(&opts))
            .await
    }

    /// List the accounts `account_id` follows.
    #[instrument(skip(self))]
    pub async fn get_account_following(&self, account_id: u64) -> Result<Vec<Account>> {
        let opts = AccountsOptions::for_account(account_id);
        self.get_multiple_accounts(ListTarget::Following, Some(&opts))
            .await
    }

    /// Search accounts matching `query`.
    ///
    /// `limit` is optional; `None` or zero leaves it to the server.
    #[instrument(skip(self))]
    pub async fn search_accounts(&self, query: &str, limit: Option<u32>) -> Result<Vec<Account>> {
        let opts = AccountsOptions::search(query, limit);
        self.get_multiple_accounts(ListTarget::Search, Some(&opts))
            .await
    }

    /// List blocked accounts.
    #[instrument(skip(self))]
    pub async fn get_blocked_accounts(&self) -> Result<Vec<Account>> {
        self.get_multiple_accounts(ListTarget::Blocks, None).await
    }

    /// List muted accounts.
    #[instrument(skip(self))]
    pub async fn get_muted_accounts(&self) -> Result<Vec<Account>> {
        self.get_multiple_accounts(ListTarget::Mutes, None).await
    }

    /// Follow a remote account by URI (`username@domain`).
    #[instrument(skip(self))]
    pub async fn follow_remote_account(&self, uri: &str) -> Result<Account> {
        if uri.is_empty() {
            return Err(Error::new(ErrorKind::InvalidId));
        }

        let endpoint = Endpoint {
            method: RequestMethod::Post,
            path: "follows".to_string(),
            query: vec![("uri".to_string(), uri.to_string())],
        };
        let account = self.fetch("follow_remote_account", endpoint).await?;
        found(account)
    }
}

fn found(account: Account) -> Result<Account> {
    if account.id == 0 {
        return Err(Error::new(ErrorKind::EntityNotFound));
    }
    Ok(account)
}
