use std::{str::FromStr, sync::Arc};

use teloxide::types::{ChatId, InlineKeyboardMarkup};

use super::keyboard::{get_about_me_keyboard, get_country_menu_keyboard, ABOUT_ME_CALLBACK};
use crate::{
    service::{dialogue::model::SessionState, Country, Language, LocaleResolver, Messenger, Translator},
    storage::{Profile, ProfileStore, Registration, StorageError},
};

/// What a callback query asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackPayload {
    AboutMe,
    /// Anything else is taken as a country code, recognized or not.
    Country(String),
}

impl CallbackPayload {
    pub fn parse(data: &str) -> Self {
        if data == ABOUT_ME_CALLBACK {
            CallbackPayload::AboutMe
        } else {
            CallbackPayload::Country(data.to_string())
        }
    }
}

/// Onboarding workflow: register on `/start`, pick a country from the menu,
/// report the stored profile on request.
///
/// Every step issues its storage calls and sends one after another. Failed
/// sends are logged and never stop the remaining sends.
pub struct Conversation {
    store: Arc<dyn ProfileStore>,
    resolver: Arc<dyn LocaleResolver>,
    translator: Arc<dyn Translator>,
}

impl Conversation {
    pub fn new(
        store: Arc<dyn ProfileStore>,
        resolver: Arc<dyn LocaleResolver>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            store,
            resolver,
            translator,
        }
    }

    pub async fn start(&self, messenger: &dyn Messenger, chat_id: ChatId, profile: Profile, session: &SessionState) {
        info!("handle_start: user {}", profile.telegram_id);

        match self.store.register_user(&profile).await {
            Ok(Registration::Created) => info!("New user added: {}", profile.telegram_id),
            Ok(Registration::AlreadyRegistered) => info!("User already exists: {}", profile.telegram_id),
            Err(e) => error!("Error adding user {}: {}", profile.telegram_id, e),
        }

        let language = session.language;

        let welcome = self.text(language, "welcome", &[("first_name", profile.first_name.as_str())]);
        self.reply(messenger, chat_id, welcome).await;

        let prompt = self.text(language, "choose_country", &[]);
        let keyboard = get_country_menu_keyboard(self.translator.as_ref(), language);
        self.reply_with_keyboard(messenger, chat_id, prompt, keyboard).await;
    }

    /// Stores the chosen country and switches the session to its language.
    /// Unrecognized codes are not stored and leave the session in English.
    pub async fn select_country(
        &self,
        messenger: &dyn Messenger,
        chat_id: ChatId,
        telegram_id: i64,
        code: &str,
        mut session: SessionState,
    ) -> SessionState {
        info!("handle_select_country: user {} picked {:?}", telegram_id, code);

        session.language = self.resolver.resolve(code);
        let language = session.language;

        let Ok(country) = Country::from_str(code) else {
            warn!("Unknown country code {:?} from user {}", code, telegram_id);
            let text = self.text(language, "unknown_country", &[("code", code)]);
            self.reply(messenger, chat_id, text).await;
            return session;
        };

        match self.store.set_country(telegram_id, country.code()).await {
            Ok(()) => info!("Country {} saved for user {}", country, telegram_id),
            Err(StorageError::NotFound(id)) => warn!("Country not saved, user {} is not registered", id),
            Err(e) => error!("Error saving country for user {}: {}", telegram_id, e),
        }

        let country_name = self.text(language, &country.name_key(), &[]);
        let confirmation = self.text(
            language,
            "country_selected",
            &[("country", country_name.as_str()), ("code", country.code())],
        );
        self.reply(messenger, chat_id, confirmation).await;

        let prompt = self.text(language, "about_me_prompt", &[]);
        let keyboard = get_about_me_keyboard(self.translator.as_ref(), language);
        self.reply_with_keyboard(messenger, chat_id, prompt, keyboard).await;

        session
    }

    pub async fn about_me(&self, messenger: &dyn Messenger, chat_id: ChatId, telegram_id: i64, session: &SessionState) {
        info!("handle_about_me: user {}", telegram_id);
        let language = session.language;

        let text = match self.store.get_user(telegram_id).await {
            Ok(Some(profile)) => self.describe(language, &profile),
            Ok(None) => self.text(language, "profile.not_found", &[]),
            Err(e) => {
                error!("Error loading user {}: {}", telegram_id, e);
                self.text(language, "errors.storage", &[])
            }
        };

        self.reply(messenger, chat_id, text).await;
    }

    /// Routes a callback query and always acknowledges it afterwards.
    pub async fn callback(
        &self,
        messenger: &dyn Messenger,
        chat_id: ChatId,
        callback_id: &str,
        telegram_id: i64,
        data: &str,
        session: SessionState,
    ) -> SessionState {
        let session = match CallbackPayload::parse(data) {
            CallbackPayload::AboutMe => {
                self.about_me(messenger, chat_id, telegram_id, &session).await;
                session
            }
            CallbackPayload::Country(code) => {
                self.select_country(messenger, chat_id, telegram_id, &code, session)
                    .await
            }
        };

        if let Err(e) = messenger.answer_callback(callback_id).await {
            error!("Failed to answer callback {}: {}", callback_id, e);
        }

        session
    }

    pub async fn unknown(&self, messenger: &dyn Messenger, chat_id: ChatId, session: &SessionState) {
        let text = self.text(session.language, "unknown_command", &[]);
        self.reply(messenger, chat_id, text).await;
    }

    fn describe(&self, language: Language, profile: &Profile) -> String {
        let not_set = self.text(language, "profile.not_set", &[]);

        let country = match profile.country.as_deref() {
            Some(code) => match Country::from_str(code) {
                Ok(country) => format!("{} ({})", self.text(language, &country.name_key(), &[]), code),
                Err(_) => code.to_string(),
            },
            None => not_set.clone(),
        };

        let telegram_id = profile.telegram_id.to_string();
        let created_at = profile.created_at_display();

        self.text(
            language,
            "profile.about_me",
            &[
                ("first_name", profile.first_name.as_str()),
                ("last_name", profile.last_name.as_deref().unwrap_or(not_set.as_str())),
                ("telegram_id", telegram_id.as_str()),
                ("created_at", created_at.as_str()),
                ("country", country.as_str()),
            ],
        )
    }

    fn text(&self, language: Language, key: &str, params: &[(&str, &str)]) -> String {
        self.translator.render(language, key, params)
    }

    async fn reply(&self, messenger: &dyn Messenger, chat_id: ChatId, text: String) {
        if let Err(e) = messenger.send_text(chat_id, text).await {
            error!("Failed to send message to {}: {}", chat_id, e);
        }
    }

    async fn reply_with_keyboard(
        &self,
        messenger: &dyn Messenger,
        chat_id: ChatId,
        text: String,
        keyboard: InlineKeyboardMarkup,
    ) {
        if let Err(e) = messenger.send_keyboard(chat_id, text, keyboard).await {
            error!("Failed to send keyboard to {}: {}", chat_id, e);
        }
    }
}
