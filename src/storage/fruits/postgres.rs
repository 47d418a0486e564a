//! Fruit collection stored in PostgreSQL.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{FruitStore, StoreResult};
use crate::domain::{Fruit, FruitId, FruitInput};
use crate::infra::config;

/// A fruit store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresFruitStore {
    pool: PgPool,
}

impl PostgresFruitStore {
    /// Connects using the configured connection string and ensures the collection exists.
    pub async fn connect() -> anyhow::Result<Self> {
        let (_, database_uri) = config::database_uri()?;
        let pool = PgPoolOptions::new()
            .max_connections(config::MAX_DB_CONNECTIONS)
            .connect(&database_uri)
            .await?;
        let store = Self::new(pool);
        store.ensure_collection().await?;
        Ok(store)
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Closes every pooled connection. Called once on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn fruit_from_row(row: &PgRow) -> StoreResult<Fruit> {
    let id: Uuid = row.try_get("id")?;
    Ok(Fruit {
        id: FruitId::from(id),
        fruit_name: row.try_get("fruit_name")?,
        is_ready_to_eat: row.try_get("is_ready_to_eat")?,
    })
}

#[async_trait]
impl FruitStore for PostgresFruitStore {
    async fn ensure_collection(&self) -> StoreResult<()> {
        // `seq` keeps insertion order for full scans.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS fruits (
                seq BIGSERIAL NOT NULL,
                id UUID PRIMARY KEY,
                fruit_name TEXT,
                is_ready_to_eat BOOLEAN NOT NULL DEFAULT FALSE
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Fruit>> {
        let rows = sqlx::query("SELECT id, fruit_name, is_ready_to_eat FROM fruits ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(fruit_from_row).collect()
    }

    async fn create(&self, input: FruitInput) -> StoreResult<Fruit> {
        let id = FruitId::new();
        let row = sqlx::query(
            "INSERT INTO fruits (id, fruit_name, is_ready_to_eat) VALUES ($1, $2, $3)
             RETURNING id, fruit_name, is_ready_to_eat",
        )
        .bind(id.as_uuid())
        .bind(input.fruit_name)
        .bind(input.is_ready_to_eat)
        .fetch_one(&self.pool)
        .await?;
        fruit_from_row(&row)
    }

    async fn get_by_id(&self, id: FruitId) -> StoreResult<Option<Fruit>> {
        let row = sqlx::query("SELECT id, fruit_name, is_ready_to_eat FROM fruits WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(fruit_from_row).transpose()
    }

    async fn update_by_id(&self, id: FruitId, input: FruitInput) -> StoreResult<Option<Fruit>> {
        // A name missing from the form keeps the stored one.
        let row = sqlx::query(
            "UPDATE fruits
             SET fruit_name = COALESCE($2, fruit_name), is_ready_to_eat = $3
             WHERE id = $1
             RETURNING id, fruit_name, is_ready_to_eat",
        )
        .bind(id.as_uuid())
        .bind(input.fruit_name)
        .bind(input.is_ready_to_eat)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(fruit_from_row).transpose()
    }

    async fn delete_by_id(&self, id: FruitId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM fruits WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
