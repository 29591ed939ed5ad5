use serde::{Deserialize, Serialize};
use strum::Display;

/// A single request understood by the daemon. One request is written per
/// connection and the daemon closes the connection after replying.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    Search {
        query: String,
    },
    Play {
        item_key: String,
        session_key: String,
        category_key: String,
        item_index: u32,
        action_title: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchReply {
    #[serde(default)]
    pub results: Vec<TrackRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// One playable entry from a search reply. Every field is optional on the
/// wire; missing fields fall back to defaults the same way missing tags do.
/// The `(item_key, session_key, category_key, index)` tuple identifies the
/// entry when requesting playback.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackRecord {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub item_key: String,
    #[serde(default, rename = "sessionKey")]
    pub session_key: String,
    #[serde(default)]
    pub category_key: String,
    #[serde(default)]
    pub index: u32,
    #[serde(default, rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub actions: Vec<TrackAction>,
}

/// A playback action the daemon offers for a record, e.g. "Play Now" or
/// "Queue". The title doubles as the identifier sent back in play requests.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackAction {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Display, Deserialize)]
#[serde(from = "String")]
pub enum ItemKind {
    #[default]
    Track,
    Album,
    Artist,
    Playlist,
    Genre,
    #[strum(to_string = "{0}")]
    Other(String),
}

impl From<String> for ItemKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "track" => ItemKind::Track,
            "album" => ItemKind::Album,
            "artist" => ItemKind::Artist,
            "playlist" => ItemKind::Playlist,
            "genre" => ItemKind::Genre,
            _ => {
                let mut chars = kind.chars();
                match chars.next() {
                    Some(first) => ItemKind::Other(
                        first
                            .to_uppercase()
                            .chain(chars.flat_map(|c| c.to_lowercase()))
                            .collect(),
                    ),
                    None => ItemKind::default(),
                }
            }
        }
    }
}

fn default_title() -> String {
    "Unknown".to_owned()
}
