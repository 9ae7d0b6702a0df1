use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use std::sync::Arc;

use super::{Profile, ProfileStore, Registration, StorageError};

/// Process-local profile store. Used by tests in place of libSQL.
#[derive(Clone, Debug, Default)]
pub struct MemoryProfileStore {
    users: Arc<DashMap<i64, Profile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn register_user(&self, profile: &Profile) -> Result<Registration, StorageError> {
        match self.users.entry(profile.telegram_id) {
            Entry::Occupied(_) => Ok(Registration::AlreadyRegistered),
            Entry::Vacant(entry) => {
                entry.insert(profile.clone());
                Ok(Registration::Created)
            }
        }
    }

    async fn set_country(&self, telegram_id: i64, country: &str) -> Result<(), StorageError> {
        match self.users.get_mut(&telegram_id) {
            Some(mut profile) => {
                profile.country = Some(country.to_string());
                Ok(())
            }
            None => Err(StorageError::NotFound(telegram_id)),
        }
    }

    async fn get_user(&self, telegram_id: i64) -> Result<Option<Profile>, StorageError> {
        Ok(self.users.get(&telegram_id).map(|profile| profile.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let store = MemoryProfileStore::new();

        let first = Profile::new(1, false, "Ann", None);
        let again = Profile::new(1, false, "Other", None);

        assert_eq!(store.register_user(&first).await.unwrap(), Registration::Created);
        assert_eq!(
            store.register_user(&again).await.unwrap(),
            Registration::AlreadyRegistered
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_user(1).await.unwrap().unwrap(), first);
    }

    #[tokio::test]
    async fn test_set_country_unknown_user() {
        let store = MemoryProfileStore::new();

        assert!(matches!(
            store.set_country(5, "FR").await,
            Err(StorageError::NotFound(5))
        ));
    }
}
