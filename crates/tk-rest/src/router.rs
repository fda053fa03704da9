//! Account endpoint routing.
//!
//! Maps the closed set of account targets to an endpoint path (relative to
//! the API prefix), an HTTP verb and query parameters. Targets parse from
//! their wire names; anything else is rejected with
//! [`ErrorKind::InvalidParameter`](crate::ErrorKind::InvalidParameter).

use std::fmt;
use std::str::FromStr;

use tusk_client::RequestMethod;

use crate::error::{Error, ErrorKind, Result};

/// A routed request: verb, path and query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: RequestMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Endpoint {
    fn get(path: impl Into<String>) -> Self {
        Self {
            method: RequestMethod::Get,
            path: path.into(),
            query: Vec::new(),
        }
    }

    fn post(path: impl Into<String>) -> Self {
        Self {
            method: RequestMethod::Post,
            path: path.into(),
            query: Vec::new(),
        }
    }

    fn with_query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.push((name.to_string(), value.into()));
        self
    }
}

/// Targets that return a single account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleTarget {
    Account,
    VerifyCredentials,
    Follow,
    Unfollow,
    Block,
    Unblock,
    Mute,
    Unmute,
    AuthorizeFollowRequest,
    RejectFollowRequest,
}

impl SingleTarget {
    /// Every single-account target.
    pub const ALL: [SingleTarget; 10] = [
        SingleTarget::Account,
        SingleTarget::VerifyCredentials,
        SingleTarget::Follow,
        SingleTarget::Unfollow,
        SingleTarget::Block,
        SingleTarget::Unblock,
        SingleTarget::Mute,
        SingleTarget::Unmute,
        SingleTarget::AuthorizeFollowRequest,
        SingleTarget::RejectFollowRequest,
    ];

    /// Wire name of the target.
    pub fn name(&self) -> &'static str {
        match self {
            SingleTarget::Account => "account",
            SingleTarget::VerifyCredentials => "verify_credentials",
            SingleTarget::Follow => "follow",
            SingleTarget::Unfollow => "unfollow",
            SingleTarget::Block => "block",
            SingleTarget::Unblock => "unblock",
            SingleTarget::Mute => "mute",
            SingleTarget::Unmute => "unmute",
            SingleTarget::AuthorizeFollowRequest => "follow_requests/authorize",
            SingleTarget::RejectFollowRequest => "follow_requests/reject",
        }
    }

    /// Returns true if the target acts on another account and so needs its ID.
    pub fn needs_id(&self) -> bool {
        !matches!(self, SingleTarget::VerifyCredentials)
    }

    /// Returns true for the follow/block/mute family, whose response must
    /// echo the requested account ID.
    pub fn echoes_id(&self) -> bool {
        matches!(
            self,
            SingleTarget::Follow
                | SingleTarget::Unfollow
                | SingleTarget::Block
                | SingleTarget::Unblock
                | SingleTarget::Mute
                | SingleTarget::Unmute
        )
    }

    /// Route the target. A zero or missing ID fails with `InvalidId` when
    /// the target needs one.
    pub fn endpoint(&self, id: Option<u64>) -> Result<Endpoint> {
        let id = match (self.needs_id(), id) {
            (false, _) => 0,
            (true, Some(id)) if id > 0 => id,
            (true, _) => return Err(Error::new(ErrorKind::InvalidId)),
        };

        let endpoint = match self {
            SingleTarget::Account => Endpoint::get(format!("accounts/{id}")),
            SingleTarget::VerifyCredentials => Endpoint::get("accounts/verify_credentials"),
            SingleTarget::Follow
            | SingleTarget::Unfollow
            | SingleTarget::Block
            | SingleTarget::Unblock
            | SingleTarget::Mute
            | SingleTarget::Unmute => Endpoint::post(format!("accounts/{id}/{}", self.name())),
            // The ID sits between the collection and the action.
            SingleTarget::AuthorizeFollowRequest => {
                Endpoint::post(format!("follow_requests/{id}/authorize"))
            }
            SingleTarget::RejectFollowRequest => {
                Endpoint::post(format!("follow_requests/{id}/reject"))
            }
        };
        Ok(endpoint)
    }
}

impl fmt::Display for SingleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SingleTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SingleTarget::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::invalid_parameter(format!("unknown account target '{s}'")))
    }
}

/// Targets that return a list of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListTarget {
    Followers,
    Following,
    Search,
    Blocks,
    Mutes,
    FollowRequests,
}

impl ListTarget {
    /// Every account-list target.
    pub const ALL: [ListTarget; 6] = [
        ListTarget::Followers,
        ListTarget::Following,
        ListTarget::Search,
        ListTarget::Blocks,
        ListTarget::Mutes,
        ListTarget::FollowRequests,
    ];

    /// Wire name of the target.
    pub fn name(&self) -> &'static str {
        match self {
            ListTarget::Followers => "followers",
            ListTarget::Following => "following",
            ListTarget::Search => "search",
            ListTarget::Blocks => "blocks",
            ListTarget::Mutes => "mutes",
            ListTarget::FollowRequests => "follow_requests",
        }
    }

    /// Route the target with its options.
    ///
    /// followers/following need an ID ≥ 1; search needs a non-empty query
    /// and only sends `limit` when it is positive.
    pub fn endpoint(&self, opts: Option<&AccountsOptions>) -> Result<Endpoint> {
        match self {
            ListTarget::Followers | ListTarget::Following => {
                let id = opts
                    .and_then(|o| o.id)
                    .filter(|id| *id > 0)
                    .ok_or_else(|| Error::new(ErrorKind::InvalidId))?;
                Ok(Endpoint::get(format!("accounts/{id}/{}", self.name())))
            }
            ListTarget::Blocks | ListTarget::Mutes | ListTarget::FollowRequests => {
                Ok(Endpoint::get(self.name()))
            }
            ListTarget::Search => {
                let opts = opts
                    .filter(|o| o.query.as_deref().is_some_and(|q| !q.is_empty()))
                    .ok_or_else(|| Error::invalid_parameter("search requires a query string"))?;
                let mut endpoint = Endpoint::get("accounts/search")
                    .with_query("q", opts.query.clone().unwrap_or_default());
                if let Some(limit) = opts.limit.filter(|l| *l > 0) {
                    endpoint = endpoint.with_query("limit", limit.to_string());
                }
                Ok(endpoint)
            }
        }
    }
}

impl fmt::Display for ListTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ListTarget::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::invalid_parameter(format!("unknown account list target '{s}'")))
    }
}

/// Options for account-list targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountsOptions {
    /// Account whose followers/following are listed.
    pub id: Option<u64>,
    /// Search query.
    pub query: Option<String>,
    /// Maximum number of search results.
    pub limit: Option<u32>,
}

impl AccountsOptions {
    /// Options selecting one account.
    pub fn for_account(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Options for a search.
    pub fn search(query: impl Into<String>, limit: Option<u32>) -> Self {
        Self {
            query: Some(query.into()),
            limit,
            ..Default::default()
        }
    }
}
