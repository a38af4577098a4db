use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::{CartItem, CartItemId};

pub struct GetCartItemByIdParams {
    pub id: CartItemId,
}

#[async_trait]
pub trait GetCartItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCartItemByIdParams) -> Result<CartItem, CartItemError>;
}
