//! Transport errors for the Practicum homework-status API.
//!
//! Anything that stops us from getting a decoded JSON body out of the
//! endpoint ends up here. Shape problems with a body that did decode are
//! reported separately by [`crate::validate`].

use thiserror::Error;

/// Errors raised while fetching homework statuses.
///
/// Every variant reaches the chat inside the failure report, so the texts
/// are Russian:
/// - [`Status`](PracticumError::Status): the endpoint answered 4xx/5xx
/// - [`Network`](PracticumError::Network): the request never got an answer
/// - [`InvalidJson`](PracticumError::InvalidJson): 2xx with an undecodable body
#[derive(Debug, Error)]
pub enum PracticumError {
    /// Non-2xx status code. 401 usually means an expired `PRACTICUM_TOKEN`.
    #[error("Эндпоинт {endpoint} недоступен. Код ответа API: {status}")]
    Status { endpoint: String, status: u16 },

    /// DNS, connection refused, timeout. Wraps the original `reqwest` error.
    #[error("Проблема с подключением: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body is not JSON, e.g. an HTML maintenance page.
    #[error("Ответ API не является корректным JSON: {0}")]
    InvalidJson(reqwest::Error),
}
