//! Lookup, graph, search and status flows through the facade.

use super::common::{account, instance, TOKEN};
use tusk_api::rest::{AccountsOptions, ErrorKind};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_current_user_then_followers() {
    let (server, client) = instance().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/verify_credentials"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(account(1, "me")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/1/followers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([account(2, "ann"), account(3, "ben")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let me = client.get_current_account().await.unwrap();
    assert_eq!(me.display_name, "ME");
    assert!(me.created_at.is_some());

    let followers = client.get_account_followers(me.id).await.unwrap();
    let names: Vec<_> = followers.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, ["ann", "ben"]);
}

#[tokio::test]
async fn test_search_then_inspect_relationship() {
    let (server, client) = instance().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/search"))
        .and(query_param("q", "ann"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([account(2, "ann")])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/relationships"))
        .and(query_param("id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "2", "following": false, "followed_by": true, "blocking": false,
             "muting": false, "requested": true}
        ])))
        .mount(&server)
        .await;

    let hits = client.search_accounts("ann", Some(1)).await.unwrap();
    let rels = client
        .get_account_relationships(&[hits[0].id])
        .await
        .unwrap();
    assert!(rels[0].followed_by);
    assert!(rels[0].requested);
}

#[tokio::test]
async fn test_statuses_with_media_filter() {
    let (server, client) = instance().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/2/statuses"))
        .and(query_param("only_media", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": "500",
            "account": account(2, "ann"),
            "content": "<p>look</p>",
            "visibility": "public",
            "media_attachments": [{"id": "9", "type": "image",
                "url": "https://files.example/9.png", "preview_url": "https://files.example/9s.png"}]
        }])))
        .mount(&server)
        .await;

    let statuses = client.get_account_statuses(2, true, false).await.unwrap();
    assert_eq!(statuses.len(), 1);
    assert!(statuses[0].has_media());
    assert_eq!(statuses[0].account.username, "ann");
}

#[tokio::test]
async fn test_target_names_route_through_facade() {
    let (server, client) = instance().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/4/following"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([account(5, "cat")])))
        .mount(&server)
        .await;

    let following = client
        .accounts_target("following", Some(&AccountsOptions::for_account(4)))
        .await
        .unwrap();
    assert_eq!(following[0].id, 5);

    for name in ["friends", "FOLLOWING", ""] {
        let err = client.accounts_target(name, None).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidParameter(_)), "{name:?}");
    }
    let err = client.account_target("poke", Some(4)).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidParameter(_)));
}

#[tokio::test]
async fn test_missing_account_is_not_found() {
    let (server, client) = instance().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = client.get_account(99).await.unwrap_err();
    assert!(err.is_not_found());
}
