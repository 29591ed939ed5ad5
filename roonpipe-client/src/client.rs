use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time::timeout;
use tracing::debug;

use crate::wire::{Command, PlayReply, SearchReply, TrackRecord};

const DEFAULT_SOCKET_PATH: &str = "/tmp/roonpipe.sock";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub fn default_socket_path() -> PathBuf {
    match env::var("ROONPIPE_SOCKET") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from(DEFAULT_SOCKET_PATH),
    }
}

pub fn request_timeout() -> Duration {
    match env::var("ROONPIPE_TIMEOUT_MS")
        .ok()
        .and_then(|millis| millis.parse().ok())
    {
        Some(millis) => Duration::from_millis(millis),
        None => DEFAULT_TIMEOUT,
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("RoonPipe is not running (no socket at {0})")]
    NotRunning(PathBuf),
    #[error("Error connecting to RoonPipe socket: {0}")]
    Connect(std::io::Error),
    #[error("Request timed out")]
    Timeout,
    #[error("Socket connection closed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid response from RoonPipe: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Daemon(String),
}

/// One-shot client for the daemon's command socket. Each request opens a
/// fresh connection, writes a single JSON document and reads the reply to
/// EOF. No connection is held between requests.
#[derive(Debug, Clone)]
pub struct RoonPipeClient {
    socket_path: PathBuf,
    timeout: Duration,
}

impl Default for RoonPipeClient {
    fn default() -> Self {
        Self::new(default_socket_path(), request_timeout())
    }
}

impl RoonPipeClient {
    pub fn new(socket_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            socket_path: socket_path.into(),
            timeout,
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub async fn search(&self, query: &str) -> Result<Vec<TrackRecord>, ClientError> {
        let reply: SearchReply = self
            .send(&Command::Search {
                query: query.to_owned(),
            })
            .await?;
        if let Some(error) = reply.error {
            return Err(ClientError::Daemon(error));
        }
        debug!("search for {query:?} returned {} results", reply.results.len());
        Ok(reply.results)
    }

    pub async fn play(&self, track: &TrackRecord, action_title: &str) -> Result<(), ClientError> {
        let reply: PlayReply = self
            .send(&Command::Play {
                item_key: track.item_key.clone(),
                session_key: track.session_key.clone(),
                category_key: track.category_key.clone(),
                item_index: track.index,
                action_title: action_title.to_owned(),
            })
            .await?;
        if let Some(error) = reply.error {
            return Err(ClientError::Daemon(error));
        }
        if !reply.success {
            return Err(ClientError::Daemon("play command rejected".to_owned()));
        }
        Ok(())
    }

    async fn send<T: DeserializeOwned>(&self, command: &Command) -> Result<T, ClientError> {
        if !self.socket_path.exists() {
            return Err(ClientError::NotRunning(self.socket_path.clone()));
        }
        let response = timeout(self.timeout, self.exchange(command))
            .await
            .map_err(|_| ClientError::Timeout)??;
        Ok(serde_json::from_slice(&response)?)
    }

    async fn exchange(&self, command: &Command) -> Result<Vec<u8>, ClientError> {
        let mut stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(ClientError::Connect)?;
        let request = serde_json::to_vec(command)?;
        stream.write_all(&request).await?;
        // Half-close so the daemon sees the end of the request
        stream.shutdown().await?;

        let mut response = Vec::new();
        stream.read_to_end(&mut response).await?;
        Ok(response)
    }
}

#[cfg(test)]
#[path = "./client_test.rs"]
mod client_test;
