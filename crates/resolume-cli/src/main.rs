//! `resolume`: command line access to a running Arena/Avenue instance.
//!
//! Prints JSON for reads, nothing for successful writes. Ctrl-C abandons the
//! request in flight.

mod commands;
mod target;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use resolume_client::{CancellationToken, ClientConfig, ResolumeClient};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_SHA"),
    ", ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "resolume", version = VERSION)]
struct Args {
    /// Optional client config file (TOML with `host` and `port`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host running the webserver; overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Webserver port; overrides the config file
    #[arg(long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn client_config(&self) -> Result<ClientConfig> {
        let mut cfg = match self.config.as_deref() {
            Some(path) => ClientConfig::load(path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => ClientConfig::default(),
        };
        if let Some(host) = &self.host {
            cfg.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        Ok(cfg)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn,resolume_client=info,resolume=info")
        }))
        .init();
    tracing::debug!(version = VERSION, built = env!("BUILD_STAMP"), "starting");

    let cfg = args.client_config()?;
    let client = ResolumeClient::new(&cfg).context("create client")?;
    tracing::info!(base_url = client.base_url(), "using resolume webserver");

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    let _ = ctrlc::set_handler(move || {
        on_interrupt.cancel();
    });

    commands::run(&client, args.command, &cancel).await
}
