use thiserror::Error;

/// Errors that can occur while delivering a message through the Bot API.
///
/// None of these ever reach the poller: [`super::Notifier`] logs and drops them.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The Bot API answered with a non-2xx status (bad token, unknown chat...).
    #[error("Bot API error (status {status}): {description}")]
    ApiError { status: u16, description: String },

    /// HTTP 200 but the API reported `"ok": false`.
    #[error("Bot API rejected the message: {0}")]
    Rejected(String),

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}
