use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::TelegramError;

/// Sends a plain-text message to a chat.
pub trait MessageSender {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError>;
}

/// Body of a `sendMessage` call.
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// The envelope every Bot API method replies with. `result` is ignored.
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

pub struct TelegramClient {
    token: String,
    client: Client,
    api_url: String,
}

impl TelegramClient {
    pub fn new(token: String, api_url: String, timeout: Duration) -> Result<Self, TelegramError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            token,
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_url, self.token)
    }
}

impl MessageSender for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            // reqwest puts the request URL in its errors, and ours carries the token.
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let description = response
                .json::<ApiReply>()
                .await
                .ok()
                .and_then(|reply| reply.description)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(TelegramError::ApiError {
                status: status.as_u16(),
                description,
            });
        }

        let reply = response
            .json::<ApiReply>()
            .await
            .map_err(reqwest::Error::without_url)?;
        if !reply.ok {
            return Err(TelegramError::Rejected(
                reply.description.unwrap_or_else(|| "no description".to_string()),
            ));
        }
        Ok(())
    }
}
