use teloxide::{macros::BotCommands, payloads::SetMyCommandsSetters, prelude::Requester, types::BotCommand, Bot};

use crate::{
    error::HandlerResult,
    service::{Language, Translator},
};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    #[command(rename = "about-me")]
    AboutMe,
    /// Telegram only accepts `[a-z0-9_]` in command names, so the menu publishes
    /// this spelling.
    #[command(rename = "about_me")]
    AboutMeMenu,
}

impl Command {
    pub fn user_commands(translator: &dyn Translator, language: Language) -> Vec<BotCommand> {
        vec![
            BotCommand::new("start", translator.render(language, "commands.start", &[])),
            BotCommand::new("about_me", translator.render(language, "commands.about_me", &[])),
        ]
    }
}

/// Publishes the command menu once per supported language, English being the
/// default for clients in any other language.
pub async fn setup_user_commands(bot: &Bot, translator: &dyn Translator) -> HandlerResult<()> {
    bot.delete_my_commands().await?;
    bot.set_my_commands(Command::user_commands(translator, Language::English))
        .await?;

    for language in Language::ALL.into_iter().filter(|l| *l != Language::English) {
        bot.set_my_commands(Command::user_commands(translator, language))
            .language_code(language.tag())
            .await?;
    }

    Ok(())
}
