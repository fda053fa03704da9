use tracing::instrument;
use tusk_client::RequestMethod;

use crate::error::{Error, ErrorKind, Result};
use crate::router::Endpoint;
use crate::types::Relationship;

impl super::AccountsClient {
    /// Get the relationship between the current user and one account.
    ///
    /// Exactly one ID is supported: an empty slice fails with `InvalidId`
    /// and more than one with `NotSupported`.
    #[instrument(skip(self))]
    pub async fn get_account_relationships(&self, ids: &[u64]) -> Result<Vec<Relationship>> {
        let id = match ids {
            [] => return Err(Error::new(ErrorKind::InvalidId)),
            [id] => *id,
            _ => {
                return Err(Error::new(ErrorKind::NotSupported(
                    "relationships for more than one account".to_string(),
                )))
            }
        };

        let endpoint = Endpoint {
            method: RequestMethod::Get,
            path: "accounts/relationships".to_string(),
            query: vec![("id".to_string(), id.to_string())],
        };
        self.fetch("relationships", endpoint).await
    }
}
