use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use libsql::{params, Builder, Connection, Database, Row, Value};
use std::sync::Arc;

use super::{Profile, ProfileStore, Registration, StorageError, CREATED_AT_FORMAT};
use crate::config::StorageConfig;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    telegram_id INTEGER PRIMARY KEY,
    is_bot INTEGER NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    country TEXT
)";

/// Shared libSQL handle. Every operation opens its own connection.
#[derive(Clone)]
pub struct TursoClient {
    inner: Arc<Database>,
}

impl TursoClient {
    pub async fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        match config {
            StorageConfig::Turso { url, token } => Self::new_remote(url, token).await,
            StorageConfig::Local { path } => Self::new_local(path).await,
        }
    }

    pub async fn new_remote(url: &str, token: &str) -> Result<Self, StorageError> {
        info!("Initializing TursoClient for {}...", url);
        let db = Builder::new_remote(url.to_string(), token.to_string()).build().await?;
        info!("TursoClient initialized");
        Ok(Self { inner: Arc::new(db) })
    }

    pub async fn new_local(path: &str) -> Result<Self, StorageError> {
        info!("Initializing TursoClient with local file {}...", path);
        let db = Builder::new_local(path).build().await?;
        info!("TursoClient initialized");
        Ok(Self { inner: Arc::new(db) })
    }

    pub async fn get_connection(&self) -> Result<Connection, StorageError> {
        let conn = self.inner.connect()?;
        Ok(conn)
    }
}

pub struct TursoProfileStore {
    client: TursoClient,
}

impl TursoProfileStore {
    /// Wraps the client and applies the `users` migration.
    pub async fn new(client: TursoClient) -> Result<Self, StorageError> {
        client.get_connection().await?.execute(CREATE_USERS_TABLE, ()).await?;
        info!("users table ready");
        Ok(Self { client })
    }
}

#[async_trait]
impl ProfileStore for TursoProfileStore {
    async fn register_user(&self, profile: &Profile) -> Result<Registration, StorageError> {
        let last_name = match &profile.last_name {
            Some(name) => Value::Text(name.clone()),
            None => Value::Null,
        };
        let country = match &profile.country {
            Some(code) => Value::Text(code.clone()),
            None => Value::Null,
        };

        let inserted = self
            .client
            .get_connection()
            .await?
            .execute(
                "INSERT INTO users (telegram_id, is_bot, first_name, last_name, created_at, country)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(telegram_id) DO NOTHING",
                vec![
                    Value::Integer(profile.telegram_id),
                    Value::Integer(profile.is_bot as i64),
                    Value::Text(profile.first_name.clone()),
                    last_name,
                    Value::Text(profile.created_at_display()),
                    country,
                ],
            )
            .await?;

        if inserted == 0 {
            Ok(Registration::AlreadyRegistered)
        } else {
            Ok(Registration::Created)
        }
    }

    async fn set_country(&self, telegram_id: i64, country: &str) -> Result<(), StorageError> {
        let updated = self
            .client
            .get_connection()
            .await?
            .execute(
                "UPDATE users SET country = ?1 WHERE telegram_id = ?2",
                params![country, telegram_id],
            )
            .await?;

        if updated == 0 {
            return Err(StorageError::NotFound(telegram_id));
        }

        Ok(())
    }

    async fn get_user(&self, telegram_id: i64) -> Result<Option<Profile>, StorageError> {
        let conn = self.client.get_connection().await?;
        let mut rows = conn
            .query(
                "SELECT telegram_id, is_bot, first_name, last_name, created_at, country
                 FROM users WHERE telegram_id = ?1 LIMIT 1",
                params![telegram_id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(profile_from_row(&row)?)),
            None => Ok(None),
        }
    }
}

fn profile_from_row(row: &Row) -> Result<Profile, StorageError> {
    Ok(Profile {
        telegram_id: row.get::<i64>(0)?,
        is_bot: row.get::<i64>(1)? != 0,
        first_name: row.get::<String>(2)?,
        last_name: optional_text(row, 3)?,
        created_at: parse_created_at(&row.get::<String>(4)?)?,
        country: optional_text(row, 5)?,
    })
}

fn optional_text(row: &Row, idx: i32) -> Result<Option<String>, StorageError> {
    match row.get_value(idx)? {
        Value::Null => Ok(None),
        Value::Text(text) => Ok(Some(text)),
        other => Err(StorageError::Corrupted(format!("column {} holds {:?}", idx, other))),
    }
}

fn parse_created_at(value: &str) -> Result<DateTime<Utc>, StorageError> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, CREATED_AT_FORMAT) {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StorageError::Corrupted(format!("created_at = {}", value)))
}
