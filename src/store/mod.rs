// Persistence port and its adapters

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Exercise, User};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Selects the exercises returned by a log query.
///
/// `from` and `to` are inclusive bounds compared as plain strings against the
/// stored `YYYY-MM-DD` dates. `limit: None` returns every match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub user_id: Uuid,
    pub from: String,
    pub to: String,
    pub limit: Option<u64>,
}

impl ExerciseFilter {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.user_id == self.user_id
            && exercise.date.as_str() >= self.from.as_str()
            && exercise.date.as_str() <= self.to.as_str()
    }
}

/// Document-style storage for users and exercises. Every method is a single
/// round trip; implementations return records in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Remove every user, returning how many were removed.
    async fn delete_users(&self) -> Result<u64, StoreError>;

    async fn insert_exercise(&self, exercise: &Exercise) -> Result<(), StoreError>;

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError>;

    /// Remove every exercise, returning how many were removed.
    async fn delete_exercises(&self) -> Result<u64, StoreError>;
}
