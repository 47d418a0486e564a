//! The fruit collection: store trait, error type and backends.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Fruit, FruitId, FruitInput};

pub mod memory;
pub mod postgres;

pub use memory::MemoryFruitStore;
pub use postgres::PostgresFruitStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing database could not be reached or rejected the query.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The identifier is not a well-formed record id.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("record not found")]
    NotFound,
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::StoreUnavailable(e.to_string())
    }
}

/// Persistence contract for the fruit collection.
///
/// Implementations own their connection handling; callers share one instance
/// behind an `Arc` for the lifetime of the process.
#[async_trait]
pub trait FruitStore: Send + Sync {
    /// Creates the backing collection if it does not exist yet.
    async fn ensure_collection(&self) -> StoreResult<()>;

    /// Cheap connectivity check.
    async fn ping(&self) -> StoreResult<()>;

    /// Every record, in insertion order.
    async fn list_all(&self) -> StoreResult<Vec<Fruit>>;

    async fn create(&self, input: FruitInput) -> StoreResult<Fruit>;

    async fn get_by_id(&self, id: FruitId) -> StoreResult<Option<Fruit>>;

    /// Returns the updated record, or `None` when no record has this id.
    async fn update_by_id(&self, id: FruitId, input: FruitInput) -> StoreResult<Option<Fruit>>;

    /// Returns whether a record was removed. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: FruitId) -> StoreResult<bool>;
}
