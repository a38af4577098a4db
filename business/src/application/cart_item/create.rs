use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::create::{CreateCartItemParams, CreateCartItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartItemUseCase for CreateCartItemUseCaseImpl {
    async fn execute(&self, params: CreateCartItemParams) -> Result<CartItem, CartItemError> {
        self.logger
            .info(&format!("Creating cart item: {}", params.item.name));

        // The store always assigns the id on create
        if let Some(client_id) = params.item.id {
            self.logger
                .debug(&format!("Ignoring client-supplied id {} on create", client_id));
        }

        let saved = self.repository.save(params.item.without_id()).await?;

        if let Some(id) = saved.id {
            self.logger.info(&format!("Cart item created: {}", id));
        }
        Ok(saved)
    }
}
