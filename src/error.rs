use thiserror::Error;

use crate::practicum::PracticumError;

/// Fatal startup errors. Any of these stops the process before polling begins.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Shape problems in a decoded homework-status body.
///
/// Checked in declaration order: the first failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The top-level value is a list, string, number or null.
    #[error("Формат ответа API - не словарь")]
    MalformedResponse,

    /// An object without the `homeworks` key.
    #[error("В ответе API отсутствует ключ homeworks")]
    MissingHomeworks,

    /// `homeworks` is present but is not a list.
    #[error("Формат домашних работ в ответе API - не список")]
    HomeworksNotSequence,
}

/// A homework record that cannot be turned into a notification.
///
/// All three variants are the same failure for the poller: the record is
/// unusable. They are kept apart so the report says which field was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("В записи о домашней работе нет поля homework_name")]
    MissingName,

    #[error("В записи о домашней работе нет поля status")]
    MissingStatus,

    /// A status outside `approved`/`reviewing`/`rejected`. Holds the raw value.
    #[error("Неизвестный статус домашней работы: {0:?}")]
    UnknownStatus(String),
}

/// Everything that can go wrong inside one poll cycle.
///
/// These are all recoverable: the poller logs them, reports them to the chat
/// and tries again after the usual delay. `Display` is forwarded unchanged
/// from the wrapped error:
/// - [`Transport`](CycleError::Transport): fetching failed
/// - [`Response`](CycleError::Response): the body has the wrong shape
/// - [`Status`](CycleError::Status): the first record cannot be announced
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Transport(#[from] PracticumError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Status(#[from] StatusError),
}
