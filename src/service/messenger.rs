use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardMarkup},
    Bot,
};

use crate::error::SendError;

/// Outbound side of the chat platform.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: String) -> Result<(), SendError>;

    async fn send_keyboard(
        &self,
        chat_id: ChatId,
        text: String,
        keyboard: InlineKeyboardMarkup,
    ) -> Result<(), SendError>;

    /// Dismisses the client-side loading indicator of a callback query.
    async fn answer_callback(&self, callback_id: &str) -> Result<(), SendError>;
}

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: String) -> Result<(), SendError> {
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_keyboard(
        &self,
        chat_id: ChatId,
        text: String,
        keyboard: InlineKeyboardMarkup,
    ) -> Result<(), SendError> {
        self.bot.send_message(chat_id, text).reply_markup(keyboard).await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), SendError> {
        self.bot
            .answer_callback_query(callback_id.to_string())
            .cache_time(1)
            .await?;
        Ok(())
    }
}
