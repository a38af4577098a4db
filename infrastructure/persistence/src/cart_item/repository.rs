use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use business::domain::cart_item::model::{CartItem, CartItemId};
use business::domain::cart_item::repository::CartItemRepository;
use business::domain::errors::RepositoryError;

const FIRST_ID: u64 = 1;

/// Process-local cart store.
///
/// Items live in a sharded concurrent map; ids come from an atomic counter
/// that only ever moves forward, so a deleted id is never handed out again.
pub struct CartItemRepositoryInMemory {
    items: DashMap<CartItemId, CartItem>,
    next_id: AtomicU64,
}

impl CartItemRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicU64::new(FIRST_ID),
        }
    }

    fn next_id(&self) -> CartItemId {
        CartItemId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for CartItemRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartItemRepository for CartItemRepositoryInMemory {
    async fn save(&self, item: CartItem) -> Result<CartItem, RepositoryError> {
        let id = match item.id {
            Some(id) => id,
            None => {
                let id = self.next_id();
                tracing::debug!(%id, "assigned cart item id");
                id
            }
        };

        let stored = item.with_id(id);
        self.items.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<CartItem>, RepositoryError> {
        let mut items: Vec<CartItem> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn find_by_id(&self, id: CartItemId) -> Result<Option<CartItem>, RepositoryError> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_id(&self, id: CartItemId) -> Result<bool, RepositoryError> {
        Ok(self.items.contains_key(&id))
    }

    async fn delete_by_id(&self, id: CartItemId) -> Result<bool, RepositoryError> {
        Ok(self.items.remove(&id).is_some())
    }

    async fn replace(
        &self,
        id: CartItemId,
        item: CartItem,
    ) -> Result<Option<CartItem>, RepositoryError> {
        // The shard lock is held from lookup to write, so a concurrent delete
        // either wins outright or waits until the replacement is stored.
        let Some(mut entry) = self.items.get_mut(&id) else {
            return Ok(None);
        };
        let stored = item.with_id(id);
        *entry = stored.clone();
        Ok(Some(stored))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn item(name: &str, quantity: i32, cents: i64) -> CartItem {
        CartItem::new(name.to_string(), quantity, Decimal::new(cents, 2)).unwrap()
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_starting_at_one() {
        let repo = CartItemRepositoryInMemory::new();

        let apple = repo.save(item("Apple", 2, 150)).await.unwrap();
        let banana = repo.save(item("Banana", 5, 75)).await.unwrap();

        assert_eq!(apple.id, Some(CartItemId::new(1)));
        assert_eq!(banana.id, Some(CartItemId::new(2)));
    }

    #[tokio::test]
    async fn should_overwrite_when_id_present() {
        let repo = CartItemRepositoryInMemory::new();
        let saved = repo.save(item("Apple", 2, 150)).await.unwrap();
        let id = saved.id.unwrap();

        let replaced = repo
            .save(item("Green Apple", 4, 200).with_id(id))
            .await
            .unwrap();

        assert_eq!(replaced.id, Some(id));
        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Green Apple");
        assert_eq!(found.quantity, 4);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_replace_present_item_under_its_own_id() {
        let repo = CartItemRepositoryInMemory::new();
        let id = repo.save(item("Apple", 2, 150)).await.unwrap().id.unwrap();

        let replaced = repo
            .replace(id, item("Green Apple", 4, 200).with_id(CartItemId::new(99)))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(replaced.id, Some(id));
        assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().name, "Green Apple");
        assert!(repo.find_by_id(CartItemId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_not_resurrect_deleted_item_on_replace() {
        let repo = CartItemRepositoryInMemory::new();
        let id = repo.save(item("Apple", 2, 150)).await.unwrap().id.unwrap();
        repo.delete_by_id(id).await.unwrap();

        let replaced = repo.replace(id, item("Green Apple", 4, 200)).await.unwrap();

        assert!(replaced.is_none());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_never_leave_item_behind_when_replace_races_delete() {
        for _ in 0..32 {
            let repo = Arc::new(CartItemRepositoryInMemory::new());
            let id = repo.save(item("Apple", 2, 150)).await.unwrap().id.unwrap();

            let replacer = {
                let repo = repo.clone();
                tokio::spawn(async move { repo.replace(id, item("Pear", 1, 50)).await.unwrap() })
            };
            let deleter = {
                let repo = repo.clone();
                tokio::spawn(async move { repo.delete_by_id(id).await.unwrap() })
            };

            replacer.await.unwrap();
            assert!(deleter.await.unwrap());
            assert!(repo.find_by_id(id).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn should_return_snapshot_of_all_items() {
        let repo = CartItemRepositoryInMemory::new();
        repo.save(item("Apple", 2, 150)).await.unwrap();
        repo.save(item("Banana", 5, 75)).await.unwrap();

        let items = repo.find_all().await.unwrap();

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Banana"]);
    }

    #[tokio::test]
    async fn should_report_presence_and_absence() {
        let repo = CartItemRepositoryInMemory::new();
        let id = repo.save(item("Apple", 2, 150)).await.unwrap().id.unwrap();

        assert!(repo.exists_by_id(id).await.unwrap());
        assert!(!repo.exists_by_id(CartItemId::new(999)).await.unwrap());
        assert!(repo.find_by_id(CartItemId::new(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_only_once() {
        let repo = CartItemRepositoryInMemory::new();
        let id = repo.save(item("Apple", 2, 150)).await.unwrap().id.unwrap();

        assert!(repo.delete_by_id(id).await.unwrap());
        assert!(!repo.delete_by_id(id).await.unwrap());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_not_reuse_ids_after_delete() {
        let repo = CartItemRepositoryInMemory::new();
        let first = repo.save(item("Apple", 2, 150)).await.unwrap().id.unwrap();
        repo.delete_by_id(first).await.unwrap();

        let second = repo.save(item("Banana", 5, 75)).await.unwrap().id.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn should_hand_out_distinct_ids_under_concurrent_saves() {
        let repo = Arc::new(CartItemRepositoryInMemory::new());
        let mut handles = Vec::new();

        for n in 0..64 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.save(item(&format!("Item {n}"), 1, 100))
                    .await
                    .unwrap()
                    .id
                    .unwrap()
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(repo.find_all().await.unwrap().len(), 64);
    }

    proptest! {
        #[test]
        fn should_keep_ids_strictly_increasing_across_deletes(
            deletes in proptest::collection::vec(any::<bool>(), 1..40)
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();

            runtime.block_on(async {
                let repo = CartItemRepositoryInMemory::new();
                let mut last_assigned: Option<CartItemId> = None;

                for delete_after in deletes {
                    let id = repo.save(item("Pear", 1, 50)).await.unwrap().id.unwrap();
                    if let Some(previous) = last_assigned {
                        assert!(id > previous);
                    }
                    last_assigned = Some(id);

                    if delete_after {
                        assert!(repo.delete_by_id(id).await.unwrap());
                    }
                }
            });
        }
    }
}
