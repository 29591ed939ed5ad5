use std::path::{Path, PathBuf};

use roonpipe_client::wire::TrackRecord;
use roonpipe_client::{ClientError, RoonPipeClient};
use tracing::{debug, info, warn};

use crate::protocol::Item;

const SEARCH_ERROR_HINT: &str = "Error occurred while searching Roon tracks";

/// Fallback icon shipped alongside the plugin.
fn default_icon() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/icons/roon.svg"))
}

/// Maps host queries to daemon searches and host activations to daemon play
/// commands. The records from the last search are kept only until the next
/// search or activation so an item id can be resolved back to its track.
pub struct Plugin {
    client: RoonPipeClient,
    preferred_action: String,
    results: Vec<TrackRecord>,
}

impl Plugin {
    pub fn new(client: RoonPipeClient, preferred_action: impl Into<String>) -> Self {
        Self {
            client,
            preferred_action: preferred_action.into(),
            results: Vec::new(),
        }
    }

    /// Produce the display items for one search request. Failures degrade to
    /// a single informational item; nothing propagates to the host.
    pub async fn search(&mut self, query: &str) -> Vec<Item> {
        self.results.clear();
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.client.search(query).await {
            Ok(results) if results.is_empty() => {
                vec![notice("No tracks found", format!("No results for \"{query}\""))]
            }
            Ok(results) => {
                let items = results
                    .iter()
                    .enumerate()
                    .map(|(id, record)| to_item(id as u32, record))
                    .collect();
                self.results = results;
                items
            }
            Err(error) => {
                warn!("search for {query:?} failed: {error}");
                vec![failure_notice(&error)]
            }
        }
    }

    /// Dispatch a play command for a previously returned item. Fire and
    /// forget: the host has no error channel once an action is taken, so
    /// failures are only logged.
    pub async fn activate(&mut self, id: u32) {
        let Some(record) = self.results.get(id as usize) else {
            debug!("ignoring activation for unknown item {id}");
            return;
        };

        let action_title = record
            .actions
            .iter()
            .map(|action| action.title.as_str())
            .filter(|title| !title.is_empty())
            .find(|title| *title == self.preferred_action)
            .or_else(|| {
                record
                    .actions
                    .iter()
                    .map(|action| action.title.as_str())
                    .find(|title| !title.is_empty())
            })
            .unwrap_or(&self.preferred_action)
            .to_owned();

        info!("playing {:?} via {action_title:?}", record.title);
        if let Err(error) = self.client.play(record, &action_title).await {
            warn!("play command for {:?} failed: {error}", record.item_key);
        }
        self.results.clear();
    }
}

fn to_item(id: u32, record: &TrackRecord) -> Item {
    let description = if record.subtitle.is_empty() {
        record.kind.to_string()
    } else {
        format!("{} • {}", record.kind, record.subtitle)
    };
    // Artwork is a cached path supplied by the daemon and may be stale
    let icon = match Path::new(&record.image) {
        path if !record.image.is_empty() && path.exists() => path.to_path_buf(),
        _ => default_icon(),
    };

    Item {
        id,
        name: record.title.clone(),
        description,
        icon: Some(icon),
    }
}

fn failure_notice(error: &ClientError) -> Item {
    match error {
        ClientError::NotRunning(_) => notice(
            "RoonPipe is not running",
            "Start the RoonPipe daemon first: roonpipe",
        ),
        ClientError::Timeout => notice("Request timed out", SEARCH_ERROR_HINT),
        ClientError::Parse(_) => notice("Invalid response from RoonPipe", SEARCH_ERROR_HINT),
        ClientError::Daemon(message) => notice(message.clone(), SEARCH_ERROR_HINT),
        ClientError::Connect(_) | ClientError::Io(_) => {
            notice("RoonPipe connection failed", SEARCH_ERROR_HINT)
        }
    }
}

/// Informational items reuse id 0. They are never activatable because the
/// retained record list is empty whenever one is shown.
fn notice(name: impl Into<String>, description: impl Into<String>) -> Item {
    Item {
        id: 0,
        name: name.into(),
        description: description.into(),
        icon: Some(default_icon()),
    }
}

#[cfg(test)]
#[path = "./plugin_test.rs"]
mod plugin_test;
