use tracing::instrument;

use crate::error::Result;
use crate::router::{ListTarget, SingleTarget};
use crate::types::Account;

impl super::AccountsClient {
    /// List accounts waiting for the current user to accept their follow.
    #[instrument(skip(self))]
    pub async fn get_account_follow_requests(&self) -> Result<Vec<Account>> {
        self.get_multiple_accounts(ListTarget::FollowRequests, None)
            .await
    }

    /// Accept (`authorize == true`) or reject a pending follow request.
    #[instrument(skip(self))]
    pub async fn follow_request_authorize(&self, id: u64, authorize: bool) -> Result<()> {
        let target = if authorize {
            SingleTarget::AuthorizeFollowRequest
        } else {
            SingleTarget::RejectFollowRequest
        };
        self.get_single_account(target, Some(id)).await?;
        Ok(())
    }
}
