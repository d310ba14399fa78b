//! Bot configuration.
//!
//! [`BotConfig`] holds the tunable, non-secret settings and is read from
//! `homework_bot.toml` when present; missing fields fall back to defaults.
//! [`Credentials`] only ever come from the environment (after `.env` is loaded)
//! and are checked as a whole before the poller starts.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::BotError;

pub const DEFAULT_CONFIG_FILE: &str = "homework_bot.toml";

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Homework-status endpoint of the Practicum API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Base URL of the Telegram Bot API.
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,

    /// Fixed pause between poll cycles, successful or not.
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,

    /// Upper bound for any single outbound HTTP request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

// Ten minutes.
fn default_retry_interval_secs() -> u64 {
    600
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            telegram_api_url: default_telegram_api_url(),
            retry_interval_secs: default_retry_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BotConfig {
    /// Loads `homework_bot.toml` from the current directory, or defaults if absent.
    pub fn load() -> Result<Self, BotError> {
        Self::load_optional(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads an explicitly requested file. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, BotError> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str::<BotConfig>(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn load_optional(path: &Path) -> Result<Self, BotError> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), BotError> {
        if self.endpoint.trim().is_empty() {
            return Err(BotError::Config("endpoint must not be empty".into()));
        }
        if self.telegram_api_url.trim().is_empty() {
            return Err(BotError::Config("telegram_api_url must not be empty".into()));
        }
        if self.retry_interval_secs == 0 {
            return Err(BotError::Config("retry_interval_secs must be positive".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(BotError::Config("request_timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Applies a command-line interval override, subject to the same checks as the file.
    pub fn with_retry_interval(mut self, secs: Option<u64>) -> Result<Self, BotError> {
        if let Some(secs) = secs {
            self.retry_interval_secs = secs;
            self.validate()?;
        }
        Ok(self)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// The three secrets the bot cannot run without.
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

// Never print the secrets themselves.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads every variable through `lookup`. Unset and empty values both
    /// count as missing, and the error names all of them at once.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BotError> {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let practicum_token = read(PRACTICUM_TOKEN);
        let telegram_token = read(TELEGRAM_TOKEN);
        let telegram_chat_id = read(TELEGRAM_CHAT_ID);

        if !missing.is_empty() {
            return Err(BotError::MissingCredentials(missing));
        }
        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}
