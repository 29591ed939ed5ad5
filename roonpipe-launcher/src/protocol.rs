use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Messages the launcher host writes to the plugin, one JSON document per
/// stdin line. The shape of this protocol belongs to the host.
#[derive(Debug, Clone, Deserialize)]
pub enum Request {
    /// Text the user typed after the trigger keyword.
    Search(String),
    /// The user selected the item with this id from the last update.
    Activate(u32),
    /// Cancel any in-flight search. Searches here are synchronous, so there
    /// is never one in flight by the time this arrives.
    Interrupt,
    /// The host is unloading the plugin.
    Exit,
}

/// Messages the plugin writes back on stdout.
#[derive(Debug, Clone, Serialize)]
pub enum Response {
    /// Replace the displayed result list.
    Update(Vec<Item>),
    /// The last search request is complete.
    Finished,
    /// Ask the host to close its window.
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,
}
