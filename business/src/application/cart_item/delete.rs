use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::delete::{DeleteCartItemParams, DeleteCartItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartItemUseCase for DeleteCartItemUseCaseImpl {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<(), CartItemError> {
        self.logger
            .info(&format!("Deleting cart item: {}", params.id));

        if !self.repository.delete_by_id(params.id).await? {
            return Err(CartItemError::NotFound);
        }

        self.logger
            .info(&format!("Cart item deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart_item::model::{CartItem, CartItemId};
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub CartItemRepo {}

        #[async_trait]
        impl CartItemRepository for CartItemRepo {
            async fn save(&self, item: CartItem) -> Result<CartItem, RepositoryError>;
            async fn find_all(&self) -> Result<Vec<CartItem>, RepositoryError>;
            async fn find_by_id(&self, id: CartItemId) -> Result<Option<CartItem>, RepositoryError>;
            async fn exists_by_id(&self, id: CartItemId) -> Result<bool, RepositoryError>;
            async fn delete_by_id(&self, id: CartItemId) -> Result<bool, RepositoryError>;
            async fn replace(&self, id: CartItemId, item: CartItem) -> Result<Option<CartItem>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_existing_cart_item() {
        let mut mock_repo = MockCartItemRepo::new();
        mock_repo
            .expect_delete_by_id()
            .withf(|id| *id == CartItemId::new(1))
            .times(1)
            .returning(|_| Ok(true));

        let use_case = DeleteCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartItemParams {
                id: CartItemId::new(1),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockCartItemRepo::new();
        mock_repo.expect_delete_by_id().returning(|_| Ok(false));

        let use_case = DeleteCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartItemParams {
                id: CartItemId::new(999),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartItemError::NotFound));
    }
}
