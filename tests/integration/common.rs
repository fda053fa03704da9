use tusk_api::AccountsClient;
use wiremock::MockServer;

pub const TOKEN: &str = "integration-token";

/// Start a mock instance and a client pointed at it.
pub async fn instance() -> (MockServer, AccountsClient) {
    let server = MockServer::start().await;
    let client = AccountsClient::new(server.uri(), TOKEN).expect("client should build");
    (server, client)
}

/// Account JSON as a current Mastodon server returns it (string IDs).
pub fn account(id: u64, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id.to_string(),
        "username": username,
        "acct": username,
        "display_name": username.to_uppercase(),
        "locked": false,
        "bot": false,
        "created_at": "2018-06-01T12:00:00.000Z",
        "followers_count": 10,
        "following_count": 20,
        "statuses_count": 30,
        "note": "<p>hello</p>",
        "url": format!("https://mastodon.example/@{username}"),
        "avatar": "https://files.example/avatar.png",
        "avatar_static": "https://files.example/avatar.png",
        "header": "https://files.example/header.png",
        "header_static": "https://files.example/header.png"
    })
}
