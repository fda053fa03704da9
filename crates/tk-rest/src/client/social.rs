use tracing::{instrument, warn};

use crate::error::{Error, ErrorKind, Result};
use crate::router::SingleTarget;

impl super::AccountsClient {
    /// Follow an account.
    #[instrument(skip(self))]
    pub async fn follow_account(&self, id: u64) -> Result<()> {
        self.act_on_account(SingleTarget::Follow, id).await
    }

    /// Unfollow an account.
    #[instrument(skip(self))]
    pub async fn unfollow_account(&self, id: u64) -> Result<()> {
        self.act_on_account(SingleTarget::Unfollow, id).await
    }

    /// Block an account.
    #[instrument(skip(self))]
    pub async fn block_account(&self, id: u64) -> Result<()> {
        self.act_on_account(SingleTarget::Block, id).await
    }

    /// Unblock an account.
    #[instrument(skip(self))]
    pub async fn unblock_account(&self, id: u64) -> Result<()> {
        self.act_on_account(SingleTarget::Unblock, id).await
    }

    /// Mute an account.
    #[instrument(skip(self))]
    pub async fn mute_account(&self, id: u64) -> Result<()> {
        self.act_on_account(SingleTarget::Mute, id).await
    }

    /// Unmute an account.
    #[instrument(skip(self))]
    pub async fn unmute_account(&self, id: u64) -> Result<()> {
        self.act_on_account(SingleTarget::Unmute, id).await
    }

    /// The server answers with the affected account; anything other than
    /// the requested ID means the action did not land.
    async fn act_on_account(&self, target: SingleTarget, id: u64) -> Result<()> {
        debug_assert!(target.echoes_id());
        let account = self.get_single_account(target, Some(id)).await?;
        if account.id != id {
            warn!(%target, requested = id, returned = account.id, "Account ID mismatch");
            return Err(Error::new(ErrorKind::EntityNotFound));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::AccountsClient;
    use crate::ErrorKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_action(server: &MockServer, action: &str, returned_id: u64) {
        Mock::given(method("POST"))
            .and(path(format!("/api/v1/accounts/5/{action}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": returned_id.to_string(), "username": "five"})),
            )
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_actions_succeed_when_id_echoed() {
        let mock_server = MockServer::start().await;
        for action in ["follow", "unfollow", "block", "unblock", "mute", "unmute"] {
            mount_action(&mock_server, action, 5).await;
        }

        let client = AccountsClient::new(mock_server.uri(), "test-token").unwrap();
        client.follow_account(5).await.unwrap();
        client.unfollow_account(5).await.unwrap();
        client.block_account(5).await.unwrap();
        client.unblock_account(5).await.unwrap();
        client.mute_account(5).await.unwrap();
        client.unmute_account(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_actions_with_mismatched_id_are_not_found() {
        let mock_server = MockServer::start().await;
        for action in ["follow", "unfollow", "block", "unblock", "mute", "unmute"] {
            mount_action(&mock_server, action, 6).await;
        }

        let client = AccountsClient::new(mock_server.uri(), "test-token").unwrap();
        let results = [
            client.follow_account(5).await,
            client.unfollow_account(5).await,
            client.block_account(5).await,
            client.unblock_account(5).await,
            client.mute_account(5).await,
            client.unmute_account(5).await,
        ];
        for result in results {
            assert!(result.unwrap_err().is_not_found());
        }
    }

    #[tokio::test]
    async fn test_action_with_empty_body_is_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/accounts/5/follow"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let client = AccountsClient::new(mock_server.uri(), "test-token").unwrap();
        assert!(client.follow_account(5).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_action_error_envelope() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/accounts/5/block"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(serde_json::json!({"error": "Validation failed"})),
            )
            .mount(&mock_server)
            .await;

        let client = AccountsClient::new(mock_server.uri(), "test-token").unwrap();
        let err = client.block_account(5).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Api(ref m) if m == "Validation failed"));
    }

    #[tokio::test]
    async fn test_action_without_envelope_is_transport_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/accounts/5/mute"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&mock_server)
            .await;

        let client = AccountsClient::new(mock_server.uri(), "test-token").unwrap();
        let err = client.mute_account(5).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Transport { .. }));
        assert!(err.to_string().starts_with("account (mute):"));
    }

    #[tokio::test]
    async fn test_action_with_zero_id_is_invalid() {
        let client = AccountsClient::new("https://mastodon.example", "token").unwrap();
        let err = client.unmute_account(0).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidId));
    }
}
