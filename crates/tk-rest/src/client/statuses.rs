use tracing::instrument;
use tusk_client::RequestMethod;

use crate::error::{Error, ErrorKind, Result};
use crate::router::Endpoint;
use crate::types::Status;

impl super::AccountsClient {
    /// List statuses posted by an account.
    ///
    /// `only_media` and `exclude_replies` are sent only when set.
    #[instrument(skip(self))]
    pub async fn get_account_statuses(
        &self,
        id: u64,
        only_media: bool,
        exclude_replies: bool,
    ) -> Result<Vec<Status>> {
        if id < 1 {
            return Err(Error::new(ErrorKind::InvalidId));
        }

        let mut query = Vec::new();
        if only_media {
            query.push(("only_media".to_string(), "true".to_string()));
        }
        if exclude_replies {
            query.push(("exclude_replies".to_string(), "true".to_string()));
        }

        let endpoint = Endpoint {
            method: RequestMethod::Get,
            path: format!("accounts/{id}/statuses"),
            query,
        };
        self.fetch("statuses", endpoint).await
    }
}
