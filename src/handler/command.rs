use std::sync::Arc;

use teloxide::dispatching::{HandlerExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::{types::Message, Bot};

use crate::command::Command;
use crate::error::{BotError, HandlerResult};
use crate::service::dialogue::SessionDialogue;
use crate::service::TelegramMessenger;
use crate::storage::Profile;

use super::Conversation;

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: SessionDialogue,
    conversation: Arc<Conversation>,
) -> HandlerResult<()> {
    let Some(user) = msg.from.as_ref() else {
        warn!("Command {:?} without a sender in chat {}", cmd, msg.chat.id);
        return Ok(());
    };

    let session = dialogue
        .get_or_default()
        .await
        .map_err(|e| BotError::DialogueStateError(e.to_string()))?;

    let messenger = TelegramMessenger::new(bot);

    match cmd {
        Command::Start => {
            conversation
                .start(&messenger, msg.chat.id, Profile::from(user), &session)
                .await
        }
        Command::AboutMe | Command::AboutMeMenu => {
            conversation
                .about_me(&messenger, msg.chat.id, user.id.0 as i64, &session)
                .await
        }
    }

    dialogue
        .update(session)
        .await
        .map_err(|e| BotError::DialogueStateError(e.to_string()))?;

    Ok(())
}

pub fn get_command_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handle_command)
}
