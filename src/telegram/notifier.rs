use super::client::MessageSender;

/// Best-effort delivery of bot messages to a single chat.
///
/// Delivery failures are logged and dropped here; callers never see them.
pub struct Notifier<M> {
    sender: M,
    chat_id: String,
}

impl<M: MessageSender> Notifier<M> {
    pub fn new(sender: M, chat_id: String) -> Self {
        Self { sender, chat_id }
    }

    /// Sends `text` and returns whether it was delivered.
    pub async fn notify(&self, text: &str) -> bool {
        match self.sender.send_message(&self.chat_id, text).await {
            Ok(()) => {
                tracing::info!(chat_id = %self.chat_id, "bot sent a message");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to send message");
                false
            }
        }
    }
}
