use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;

pub struct CreateCartItemParams {
    pub item: CartItem,
}

#[async_trait]
pub trait CreateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateCartItemParams) -> Result<CartItem, CartItemError>;
}
