mod error;
#[cfg(test)]
mod memory;
mod model;
mod turso;

pub use error::StorageError;
#[cfg(test)]
pub use memory::MemoryProfileStore;
pub use model::{Profile, Registration, CREATED_AT_FORMAT};
pub use turso::{TursoClient, TursoProfileStore};

use async_trait::async_trait;

/// CRUD facade over the `users` table.
#[async_trait]
pub trait ProfileStore: Send + Sync + 'static {
    /// Inserts the profile unless a row with the same `telegram_id` exists.
    /// An existing row is left untouched and reported as
    /// [`Registration::AlreadyRegistered`].
    async fn register_user(&self, profile: &Profile) -> Result<Registration, StorageError>;

    /// Fails with [`StorageError::NotFound`] when no row matches.
    async fn set_country(&self, telegram_id: i64, country: &str) -> Result<(), StorageError>;

    async fn get_user(&self, telegram_id: i64) -> Result<Option<Profile>, StorageError>;
}
