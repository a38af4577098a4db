use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::{CartItem, CartItemId};

/// Full replacement of an existing item. Any id carried by `item` is ignored.
pub struct UpdateCartItemParams {
    pub id: CartItemId,
    pub item: CartItem,
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartItemError>;
}
