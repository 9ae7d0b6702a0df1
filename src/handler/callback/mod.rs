use std::sync::Arc;

use crate::{
    error::{BotError, HandlerResult},
    service::{dialogue::SessionDialogue, TelegramMessenger},
};

use teloxide::{dispatching::UpdateHandler, prelude::*, types::CallbackQuery};

use super::Conversation;

async fn handle_callback(
    bot: Bot,
    dialogue: SessionDialogue,
    q: CallbackQuery,
    conversation: Arc<Conversation>,
) -> HandlerResult<()> {
    let messenger = TelegramMessenger::new(bot);
    let data = q.data.as_deref().unwrap_or_default();
    let chat_id = q
        .message
        .as_ref()
        .map(|message| message.chat().id)
        .unwrap_or_else(|| ChatId::from(q.from.id));

    let session = dialogue
        .get_or_default()
        .await
        .map_err(|e| BotError::DialogueStateError(e.to_string()))?;

    let session = conversation
        .callback(&messenger, chat_id, &q.id, q.from.id.0 as i64, data, session)
        .await;

    dialogue
        .update(session)
        .await
        .map_err(|e| BotError::DialogueStateError(e.to_string()))?;

    Ok(())
}

pub fn get_callback_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    Update::filter_callback_query().endpoint(handle_callback)
}
