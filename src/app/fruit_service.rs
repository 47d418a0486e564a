//! The fruit service.
//!
//! Sits between the HTTP handlers and the [`FruitStore`]:
//! 1.  Parses path identifiers into [`FruitId`]s (malformed ids never reach the store).
//! 2.  Applies the checkbox coercion to incoming forms.
//! 3.  Performs exactly one store operation per call.

use std::sync::Arc;

use crate::domain::{Fruit, FruitForm, FruitId};
use crate::storage::{FruitStore, StoreError, StoreResult};

#[derive(Clone)]
pub struct FruitService {
    store: Arc<dyn FruitStore>,
}

impl FruitService {
    pub fn new(store: Arc<dyn FruitStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> StoreResult<Vec<Fruit>> {
        self.store.list_all().await
    }

    pub async fn create(&self, form: FruitForm) -> StoreResult<Fruit> {
        self.store.create(form.into_input()).await
    }

    /// Looks up a record, turning an absent one into [`StoreError::NotFound`].
    pub async fn get_by_id(&self, raw_id: &str) -> StoreResult<Fruit> {
        let id: FruitId = raw_id.parse()?;
        self.store.get_by_id(id).await?.ok_or(StoreError::NotFound)
    }

    /// Updating an absent id is a no-op and yields `None`.
    pub async fn update_by_id(&self, raw_id: &str, form: FruitForm) -> StoreResult<Option<Fruit>> {
        let id: FruitId = raw_id.parse()?;
        self.store.update_by_id(id, form.into_input()).await
    }

    pub async fn delete_by_id(&self, raw_id: &str) -> StoreResult<bool> {
        let id: FruitId = raw_id.parse()?;
        self.store.delete_by_id(id).await
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryFruitStore;

    fn service() -> FruitService {
        FruitService::new(Arc::new(MemoryFruitStore::new()))
    }

    fn form(name: Option<&str>, checkbox: Option<&str>) -> FruitForm {
        FruitForm {
            fruit_name: name.map(str::to_string),
            is_ready_to_eat: checkbox.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_mango_is_listed_as_ready() {
        let svc = service();
        svc.create(form(Some("Mango"), Some("on"))).await.unwrap();

        let all = svc.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].fruit_name.as_deref(), Some("Mango"));
        assert!(all[0].is_ready_to_eat);
    }

    #[tokio::test]
    async fn create_lime_without_checkbox_is_not_ready() {
        let svc = service();
        let lime = svc.create(form(Some("Lime"), None)).await.unwrap();

        let stored = svc.get_by_id(&lime.id.to_string()).await.unwrap();
        assert_eq!(stored.fruit_name.as_deref(), Some("Lime"));
        assert!(!stored.is_ready_to_eat);
    }

    #[tokio::test]
    async fn update_keeps_id_and_replaces_fields() {
        let svc = service();
        let fruit = svc.create(form(Some("Kiwi"), None)).await.unwrap();
        let id = fruit.id.to_string();

        let updated = svc
            .update_by_id(&id, form(Some("Golden Kiwi"), Some("on")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, fruit.id);
        assert_eq!(updated.fruit_name.as_deref(), Some("Golden Kiwi"));
        assert!(updated.is_ready_to_eat);

        // Unchecked on the next edit flips the flag back.
        let updated = svc
            .update_by_id(&id, form(Some("Golden Kiwi"), None))
            .await
            .unwrap()
            .unwrap();
        assert!(!updated.is_ready_to_eat);
        assert_eq!(svc.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let fruit = svc.create(form(Some("Plum"), Some("on"))).await.unwrap();
        let id = fruit.id.to_string();

        assert!(svc.delete_by_id(&id).await.unwrap());
        assert!(matches!(svc.get_by_id(&id).await, Err(StoreError::NotFound)));
        assert!(!svc.delete_by_id(&id).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_ids_are_rejected() {
        let svc = service();
        assert!(matches!(
            svc.get_by_id("12345").await,
            Err(StoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            svc.update_by_id("nope", form(None, None)).await,
            Err(StoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            svc.delete_by_id("").await,
            Err(StoreError::InvalidIdentifier(_))
        ));
    }
}
