//! Run one account operation against an instance and print the result as JSON.
//!
//! ```sh
//! export TUSK_INSTANCE_URL='https://mastodon.example'
//! export TUSK_ACCESS_TOKEN='...'
//! cargo run --bin tusk-accounts -- search gargron 5
//! ```
//!
//! Set `RUST_LOG=tusk_client=debug` to see request traffic.

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use tusk_api::rest::{AccountsClient, Error, Result};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const USAGE: &str = "\
usage: tusk-accounts <command> [args]

commands:
  me                                     current account
  show <id>                              account by ID
  followers <id> | following <id>        social graph
  follow|unfollow <id>
  block|unblock <id>
  mute|unmute <id>
  search <query> [limit]
  blocks | mutes | requests
  relationship <id>
  statuses <id> [--media] [--no-replies]
  authorize|reject <id>                  answer a follow request
  follow-remote <user@domain>";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let client = AccountsClient::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  export TUSK_INSTANCE_URL='https://your.instance'");
        eprintln!("  export TUSK_ACCESS_TOKEN='...'");
        std::process::exit(1);
    });

    tracing::debug!(instance = client.instance_url(), %command, "Running command");

    match run(&client, command, rest).await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(
    client: &AccountsClient,
    command: &str,
    args: &[String],
) -> std::result::Result<Value, BoxError> {
    let value = match command {
        "me" => to_json(client.get_current_account().await?)?,
        "show" => to_json(client.get_account(id_arg(args)?).await?)?,
        "followers" => to_json(client.get_account_followers(id_arg(args)?).await?)?,
        "following" => to_json(client.get_account_following(id_arg(args)?).await?)?,
        "follow" | "unfollow" | "block" | "unblock" | "mute" | "unmute" => {
            let id = id_arg(args)?;
            match command {
                "follow" => client.follow_account(id).await?,
                "unfollow" => client.unfollow_account(id).await?,
                "block" => client.block_account(id).await?,
                "unblock" => client.unblock_account(id).await?,
                "mute" => client.mute_account(id).await?,
                _ => client.unmute_account(id).await?,
            }
            json!({ "id": id, "done": command })
        }
        "search" => {
            let query = args.first().map(String::as_str).unwrap_or_default();
            let limit = match args.get(1) {
                Some(raw) => Some(
                    raw.parse()
                        .map_err(|_| Error::invalid_parameter(format!("bad limit '{raw}'")))?,
                ),
                None => None,
            };
            to_json(client.search_accounts(query, limit).await?)?
        }
        "blocks" => to_json(client.get_blocked_accounts().await?)?,
        "mutes" => to_json(client.get_muted_accounts().await?)?,
        "requests" => to_json(client.get_account_follow_requests().await?)?,
        "relationship" => to_json(client.get_account_relationships(&[id_arg(args)?]).await?)?,
        "statuses" => {
            let id = id_arg(args)?;
            let only_media = args.iter().any(|a| a == "--media");
            let exclude_replies = args.iter().any(|a| a == "--no-replies");
            to_json(
                client
                    .get_account_statuses(id, only_media, exclude_replies)
                    .await?,
            )?
        }
        "authorize" | "reject" => {
            let id = id_arg(args)?;
            client
                .follow_request_authorize(id, command == "authorize")
                .await?;
            json!({ "id": id, "done": command })
        }
        "follow-remote" => {
            let uri = args.first().map(String::as_str).unwrap_or_default();
            to_json(client.follow_remote_account(uri).await?)?
        }
        other => {
            return Err(Error::invalid_parameter(format!(
                "unknown command '{other}'\n\n{USAGE}"
            ))
            .into())
        }
    };
    Ok(value)
}

/// First positional argument as an account ID.
fn id_arg(args: &[String]) -> Result<u64> {
    let raw = args
        .first()
        .ok_or_else(|| Error::invalid_parameter("missing account ID"))?;
    raw.parse()
        .map_err(|_| Error::invalid_parameter(format!("bad account ID '{raw}'")))
}

fn to_json<T: serde::Serialize>(value: T) -> serde_json::Result<Value> {
    serde_json::to_value(value)
}
