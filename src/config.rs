use shuttle_runtime::SecretStore;

const DEFAULT_DATABASE_PATH: &str = "users.db";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing secret: {0}")]
    Missing(String),
    #[error("Invalid secret {key}: {value}")]
    Invalid { key: String, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub storage: StorageConfig,
    pub dialogue: DialogueConfig,
}

#[derive(Clone, Debug)]
pub struct TelegramConfig(pub String);

#[derive(Clone, Debug, PartialEq)]
pub enum StorageConfig {
    /// Remote libSQL database hosted on Turso.
    Turso { url: String, token: String },
    /// Local SQLite file.
    Local { path: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogueConfig {
    pub use_redis: bool,
    pub redis_url: Option<String>,
}

impl AppConfig {
    /// Builds the config from any key lookup. Shuttle secrets go through
    /// [`build_config`], tests pass a plain map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| ConfigError::Missing(key.to_string()));

        let telegram = TelegramConfig(required("TELEGRAM_BOT_TOKEN")?);

        let storage = match (lookup("TURSO_URL"), lookup("TURSO_TOKEN")) {
            (Some(url), Some(token)) => StorageConfig::Turso { url, token },
            (Some(_), None) => return Err(ConfigError::Missing("TURSO_TOKEN".to_string())),
            (None, Some(_)) => return Err(ConfigError::Missing("TURSO_URL".to_string())),
            (None, None) => StorageConfig::Local {
                path: lookup("DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            },
        };

        let use_redis = match lookup("DIALOGUE_USE_REDIS") {
            Some(value) => value.parse::<bool>().map_err(|_| ConfigError::Invalid {
                key: "DIALOGUE_USE_REDIS".to_string(),
                value,
            })?,
            None => false,
        };

        let redis_url = if use_redis {
            Some(required("REDIS_URL")?)
        } else {
            lookup("REDIS_URL")
        };

        Ok(Self {
            telegram,
            storage,
            dialogue: DialogueConfig { use_redis, redis_url },
        })
    }
}

pub fn build_config(secret_store: &SecretStore) -> Result<AppConfig, ConfigError> {
    info!("Building AppConfig...");
    let config = AppConfig::from_lookup(|key| secret_store.get(key))?;
    info!("AppConfig built");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_token_is_required() {
        let result = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::Missing("TELEGRAM_BOT_TOKEN".to_string())
        );
    }

    #[test]
    fn test_defaults_to_local_database_and_memory_dialogue() {
        let config = AppConfig::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).unwrap();

        assert_eq!(config.telegram.0, "123:abc");
        assert_eq!(
            config.storage,
            StorageConfig::Local {
                path: "users.db".to_string()
            }
        );
        assert!(!config.dialogue.use_redis);
    }

    #[test]
    fn test_turso_requires_both_url_and_token() {
        let result = AppConfig::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TURSO_URL", "libsql://db.turso.io"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("TURSO_TOKEN".to_string()));

        let config = AppConfig::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TURSO_URL", "libsql://db.turso.io"),
            ("TURSO_TOKEN", "secret"),
        ]))
        .unwrap();
        assert_eq!(
            config.storage,
            StorageConfig::Turso {
                url: "libsql://db.turso.io".to_string(),
                token: "secret".to_string()
            }
        );
    }

    #[test]
    fn test_redis_dialogue_needs_url() {
        let result = AppConfig::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("DIALOGUE_USE_REDIS", "true"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("REDIS_URL".to_string()));

        let result = AppConfig::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("DIALOGUE_USE_REDIS", "yes"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
