pub mod client;
pub mod error;
pub mod notifier;

pub use client::{MessageSender, TelegramClient};
pub use notifier::Notifier;
