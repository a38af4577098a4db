use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::update::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartItemError> {
        self.logger
            .info(&format!("Updating cart item: {}", params.id));

        // Path id wins over whatever the body carried
        let replacement = params.item.with_id(params.id);
        let Some(updated) = self.repository.replace(params.id, replacement).await? else {
            self.logger
                .warn(&format!("Cart item not found for update: {}", params.id));
            return Err(CartItemError::NotFound);
        };

        self.logger
            .info(&format!("Cart item updated: {}", params.id));
        Ok(updated)
    }
}
