mod cli;
mod config;
mod error;
mod poller;
mod practicum;
mod status;
mod telegram;
mod validate;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{BotConfig, Credentials};
use poller::Poller;
use practicum::PracticumClient;
use telegram::{Notifier, TelegramClient};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // A missing .env is fine; the variables may come from the real environment.
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        tracing::warn!(error = %e, "failed to read .env file");
    }

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!(error = %e, "required configuration is missing, shutting down");
            return Err(e.into());
        }
    };

    let config = match &cli.config {
        Some(path) => BotConfig::load_from(path)?,
        None => BotConfig::load()?,
    }
    .with_retry_interval(cli.retry_interval)?;

    let source = PracticumClient::new(
        credentials.practicum_token,
        config.endpoint.clone(),
        config.request_timeout(),
    )?;
    let telegram = TelegramClient::new(
        credentials.telegram_token,
        config.telegram_api_url.clone(),
        config.request_timeout(),
    )?;
    let notifier = Notifier::new(telegram, credentials.telegram_chat_id);

    tracing::info!(endpoint = source.endpoint(), "homework bot starting");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("received Ctrl+C, shutting down");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => tracing::error!(error = %e, "unable to listen for shutdown signal"),
        }
    });

    let mut poller = Poller::new(
        source,
        notifier,
        config.retry_interval(),
        Utc::now().timestamp(),
    );
    poller.run(shutdown_rx).await;

    Ok(())
}
