use std::io;

use eyre::Result;
use roonpipe_client::RoonPipeClient;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::plugin::Plugin;
use crate::protocol::{Request, Response};
use crate::settings::Settings;

mod plugin;
mod protocol;
mod settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout carries the host protocol, so logs have to go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ROONPIPE_LAUNCHER_LOG")
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let settings = Settings::load();
    let client = RoonPipeClient::new(settings.socket_path, settings.timeout);
    info!("connecting to RoonPipe at {:?}", client.socket_path());
    let mut plugin = Plugin::new(client, settings.preferred_action);

    let mut requests = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();

    while let Some(line) = requests.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let request = match serde_json::from_str::<Request>(&line) {
            Ok(request) => request,
            Err(error) => {
                error!("unable to parse host request {line:?}: {error}");
                continue;
            }
        };

        match request {
            Request::Search(query) => {
                let items = plugin.search(&query).await;
                respond(&mut out, &Response::Update(items)).await?;
                respond(&mut out, &Response::Finished).await?;
            }
            Request::Activate(id) => {
                plugin.activate(id).await;
                respond(&mut out, &Response::Close).await?;
            }
            Request::Interrupt => {}
            Request::Exit => break,
        }
    }

    info!("host closed the request stream, exiting");
    Ok(())
}

async fn respond(out: &mut Stdout, response: &Response) -> Result<()> {
    let mut line = serde_json::to_string(response)?;
    line.push('\n');
    out.write_all(line.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}
