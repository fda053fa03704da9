//! Account, relationship and status entities.
//!
//! Every field defaults when absent so that an empty object decodes to the
//! zero entity; callers rely on `id == 0` meaning "nothing was returned".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: u64,
    pub username: String,
    /// `username` for local accounts, `username@domain` for remote ones.
    pub acct: String,
    pub display_name: String,
    pub locked: bool,
    pub bot: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub followers_count: u64,
    pub following_count: u64,
    pub statuses_count: u64,
    /// Biography, as HTML.
    pub note: String,
    pub url: String,
    pub avatar: String,
    pub avatar_static: String,
    pub header: String,
    pub header_static: String,
}

/// Follow/block/mute state between the current user and another account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Relationship {
    /// The other account.
    #[serde(deserialize_with = "id::deserialize")]
    pub id: u64,
    pub following: bool,
    pub followed_by: bool,
    pub blocking: bool,
    pub blocked_by: bool,
    pub muting: bool,
    pub muting_notifications: bool,
    pub requested: bool,
    pub domain_blocking: bool,
    pub note: String,
}

/// A post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Status {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: u64,
    pub uri: String,
    pub url: Option<String>,
    pub account: Account,
    #[serde(deserialize_with = "id::deserialize_option")]
    pub in_reply_to_id: Option<u64>,
    #[serde(deserialize_with = "id::deserialize_option")]
    pub in_reply_to_account_id: Option<u64>,
    pub reblog: Option<Box<Status>>,
    /// Body, as HTML.
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
    pub reblogs_count: u64,
    pub favourites_count: u64,
    pub replies_count: u64,
    pub reblogged: Option<bool>,
    pub favourited: Option<bool>,
    pub sensitive: bool,
    pub spoiler_text: String,
    pub visibility: String,
    pub language: Option<String>,
    pub media_attachments: Vec<Attachment>,
    pub mentions: Vec<Mention>,
    pub tags: Vec<Tag>,
}

impl Status {
    /// Returns true if the status replies to another status.
    pub fn is_reply(&self) -> bool {
        self.in_reply_to_id.is_some()
    }

    /// Returns true if the status carries media attachments.
    pub fn has_media(&self) -> bool {
        !self.media_attachments.is_empty()
    }
}

/// Media attached to a status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Attachment {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: u64,
    /// `image`, `video`, `gifv`, `audio` or `unknown`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Missing while the server is still processing the upload.
    pub url: Option<String>,
    /// Missing for audio without a thumbnail.
    pub preview_url: Option<String>,
    pub remote_url: Option<String>,
    pub description: Option<String>,
}

/// An account mentioned in a status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Mention {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: u64,
    pub username: String,
    pub acct: String,
    pub url: String,
}

/// A hashtag used in a status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    pub url: String,
}

/// Entity IDs arrive as JSON numbers from older servers and as numeric
/// strings from newer ones.
mod id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    impl RawId {
        fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
            match self {
                RawId::Number(n) => Ok(n),
                RawId::Text(s) => s
                    .parse()
                    .map_err(|_| E::custom(format!("invalid numeric id '{s}'"))),
            }
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        RawId::deserialize(d)?.into_u64()
    }

    pub(super) fn deserialize_option<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<u64>, D::Error> {
        Option::<RawId>::deserialize(d)?
            .map(RawId::into_u64::<D::Error>)
            .transpose()
    }
}
