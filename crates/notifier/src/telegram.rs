use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;

use sentinel_common::error::DeliveryError;

use crate::Notifier;

/// Sends notifications through a Telegram bot.
pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
}

impl TelegramNotifier {
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        Self {
            bot: Bot::new(bot_token),
            chat: parse_recipient(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        self.bot
            .send_message(self.chat.clone(), text)
            .await
            .map_err(|e| DeliveryError(e.to_string()))?;

        tracing::info!(message = text, "Message delivered to chat");
        Ok(())
    }
}

/// Numeric ids address a chat directly; anything else is a channel username.
fn parse_recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) if chat_id.starts_with('@') => Recipient::ChannelUsername(chat_id.to_string()),
        Err(_) => Recipient::ChannelUsername(format!("@{chat_id}")),
    }
}
