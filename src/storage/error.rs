use libsql::errors::Error as TursoError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Turso error: {0}")]
    Turso(#[from] TursoError),
    #[error("User {0} not found")]
    NotFound(i64),
    #[error("Corrupted row: {0}")]
    Corrupted(String),
}
