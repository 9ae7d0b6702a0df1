use std::sync::Arc;

use teloxide::{prelude::*, types::Message, Bot};

use crate::{
    error::{BotError, HandlerResult},
    service::{dialogue::SessionDialogue, TelegramMessenger},
};

use super::Conversation;

/// Anything that is not a known command gets a short usage hint.
pub async fn handle_message_unknown(
    bot: Bot,
    msg: Message,
    dialogue: SessionDialogue,
    conversation: Arc<Conversation>,
) -> HandlerResult<()> {
    let session = dialogue
        .get_or_default()
        .await
        .map_err(|e| BotError::DialogueStateError(e.to_string()))?;

    conversation
        .unknown(&TelegramMessenger::new(bot), msg.chat.id, &session)
        .await;

    Ok(())
}
