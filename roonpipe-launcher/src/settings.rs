use std::env;
use std::path::PathBuf;
use std::time::Duration;

use roonpipe_client::{default_socket_path, request_timeout};

const DEFAULT_PLAY_ACTION: &str = "Play Now";

/// Runtime settings, resolved from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub socket_path: PathBuf,
    pub timeout: Duration,
    pub preferred_action: String,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            socket_path: default_socket_path(),
            timeout: request_timeout(),
            preferred_action: env::var("ROONPIPE_PLAY_ACTION")
                .unwrap_or_else(|_| DEFAULT_PLAY_ACTION.to_owned()),
        }
    }
}
