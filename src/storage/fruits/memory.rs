//! In-process fruit store backing the unit and route tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{FruitStore, StoreResult};
use crate::domain::{Fruit, FruitId, FruitInput};

#[derive(Default)]
pub struct MemoryFruitStore {
    fruits: RwLock<Vec<Fruit>>,
}

impl MemoryFruitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FruitStore for MemoryFruitStore {
    async fn ensure_collection(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Fruit>> {
        Ok(self.fruits.read().await.clone())
    }

    async fn create(&self, input: FruitInput) -> StoreResult<Fruit> {
        let fruit = Fruit::new(FruitId::new(), input);
        self.fruits.write().await.push(fruit.clone());
        Ok(fruit)
    }

    async fn get_by_id(&self, id: FruitId) -> StoreResult<Option<Fruit>> {
        let fruits = self.fruits.read().await;
        Ok(fruits.iter().find(|f| f.id == id).cloned())
    }

    async fn update_by_id(&self, id: FruitId, input: FruitInput) -> StoreResult<Option<Fruit>> {
        let mut fruits = self.fruits.write().await;
        Ok(fruits.iter_mut().find(|f| f.id == id).map(|fruit| {
            fruit.apply(input);
            fruit.clone()
        }))
    }

    async fn delete_by_id(&self, id: FruitId) -> StoreResult<bool> {
        let mut fruits = self.fruits.write().await;
        let before = fruits.len();
        fruits.retain(|f| f.id != id);
        Ok(fruits.len() != before)
    }
}
