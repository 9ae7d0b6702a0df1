use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teloxide::types::User;

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub telegram_id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub country: Option<String>,
}

impl Profile {
    pub fn new(telegram_id: i64, is_bot: bool, first_name: impl Into<String>, last_name: Option<String>) -> Self {
        Self {
            telegram_id,
            is_bot,
            first_name: first_name.into(),
            last_name,
            created_at: Utc::now(),
            country: None,
        }
    }

    pub fn created_at_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Profile::new(
            user.id.0 as i64,
            user.is_bot,
            user.first_name.clone(),
            user.last_name.clone(),
        )
    }
}

/// Outcome of an idempotent registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    AlreadyRegistered,
}
