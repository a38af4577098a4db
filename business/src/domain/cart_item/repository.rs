use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{CartItem, CartItemId};

/// Storage port for cart items.
///
/// `save` assigns the next identifier when the item has none and overwrites
/// the stored value otherwise. Identifiers are never reused.
///
/// `replace` overwrites only an item that is still present, as one atomic
/// step, and returns `None` when the id is gone.
#[async_trait]
pub trait CartItemRepository: Send + Sync {
    async fn save(&self, item: CartItem) -> Result<CartItem, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<CartItem>, RepositoryError>;
    async fn find_by_id(&self, id: CartItemId) -> Result<Option<CartItem>, RepositoryError>;
    async fn exists_by_id(&self, id: CartItemId) -> Result<bool, RepositoryError>;
    async fn delete_by_id(&self, id: CartItemId) -> Result<bool, RepositoryError>;
    async fn replace(
        &self,
        id: CartItemId,
        item: CartItem,
    ) -> Result<Option<CartItem>, RepositoryError>;
}
