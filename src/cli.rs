//! Command-line flags. Everything secret comes from the environment instead.

use std::path::PathBuf;

use clap::Parser;

/// Polls Yandex Practicum for homework review status changes and reports them to Telegram.
#[derive(Debug, Parser)]
#[command(name = "homework-bot", version, about)]
pub struct Cli {
    /// Path to a TOML config file (default: ./homework_bot.toml if present).
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Seconds to wait between poll cycles; overrides the config file.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub retry_interval: Option<u64>,

    /// Enables debug logging unless RUST_LOG says otherwise.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}
