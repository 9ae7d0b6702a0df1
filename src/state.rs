use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::BotResult,
    handler::Conversation,
    service::{
        dialogue::{DialogueService, SessionStorage},
        CountryLocaleResolver, I18nTranslator, Translator,
    },
    storage::{TursoClient, TursoProfileStore},
};

/// Long-lived collaborators handed to the dispatcher as dependencies.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<Conversation>,
    pub sessions: Arc<SessionStorage>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> BotResult<Self> {
        let client = TursoClient::new(&config.storage).await?;
        let store = Arc::new(TursoProfileStore::new(client).await?);

        let translator: Arc<dyn Translator> = Arc::new(I18nTranslator);
        let conversation = Arc::new(Conversation::new(
            store,
            Arc::new(CountryLocaleResolver),
            Arc::clone(&translator),
        ));

        let sessions = DialogueService::get_dialogue_storage(&config.dialogue).await?;

        Ok(Self {
            conversation,
            sessions,
            translator,
        })
    }
}
