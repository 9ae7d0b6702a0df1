use std::sync::Arc;

use model::SessionState;
use teloxide::dispatching::dialogue::{serializer::Json, Dialogue, ErasedStorage, InMemStorage, RedisStorage, Storage};

use crate::{config::DialogueConfig, error::BotError};

pub mod model;

pub type SessionStorage = ErasedStorage<SessionState>;
pub type SessionDialogue = Dialogue<SessionState, SessionStorage>;

pub struct DialogueService;

impl DialogueService {
    pub async fn get_dialogue_storage(config: &DialogueConfig) -> Result<Arc<SessionStorage>, BotError> {
        match (config.use_redis, config.redis_url.as_deref()) {
            (true, Some(url)) => {
                info!("Using Redis dialogue storage");
                let storage = RedisStorage::open(url, Json)
                    .await
                    .map_err(|e| BotError::DialogueStateError(e.to_string()))?
                    .erase();
                Ok(storage)
            }
            _ => {
                info!("Using in-memory dialogue storage");
                Ok(InMemStorage::<SessionState>::new().erase())
            }
        }
    }
}
