//! Follow/block/mute and follow-request flows through the facade.

use super::common::{account, instance};
use tusk_api::rest::ErrorKind;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_block_then_list_blocks() {
    let (server, client) = instance().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/accounts/7/block"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account(7, "troll")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([account(7, "troll")])))
        .expect(1)
        .mount(&server)
        .await;

    client.block_account(7).await.unwrap();
    let blocked = client.get_blocked_accounts().await.unwrap();
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].id, 7);
}

#[tokio::test]
async fn test_mute_with_wrong_account_returned() {
    let (server, client) = instance().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/accounts/7/mute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account(8, "other")))
        .mount(&server)
        .await;

    let err = client.mute_account(7).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_envelope_with_success_status_is_still_an_error() {
    let (server, client) = instance().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/accounts/7/follow"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "You are blocked"})),
        )
        .mount(&server)
        .await;

    let err = client.follow_account(7).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Api(_)));
    assert_eq!(err.to_string(), "You are blocked");
}

#[tokio::test]
async fn test_review_follow_requests() {
    let (server, client) = instance().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/follow_requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            account(11, "keep"),
            account(12, "drop")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/follow_requests/11/authorize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account(11, "keep")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/follow_requests/12/reject"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account(12, "drop")))
        .expect(1)
        .mount(&server)
        .await;

    for request in client.get_account_follow_requests().await.unwrap() {
        let accept = request.username == "keep";
        client
            .follow_request_authorize(request.id, accept)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_follow_remote_account() {
    let (server, client) = instance().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/follows"))
        .and(query_param("uri", "dee@elsewhere.example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account(40, "dee")))
        .expect(1)
        .mount(&server)
        .await;

    let remote = client
        .follow_remote_account("dee@elsewhere.example")
        .await
        .unwrap();
    assert_eq!(remote.id, 40);
}

#[tokio::test]
async fn test_unreachable_instance_is_transport_error() {
    let client = tusk_api::AccountsClient::new("http://127.0.0.1:1", "token").unwrap();
    let err = client.unfollow_account(3).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Transport { .. }));
    assert!(err.to_string().starts_with("account (unfollow):"));
}
