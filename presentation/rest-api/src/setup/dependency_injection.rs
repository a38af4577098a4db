use std::sync::Arc;

use business::domain::logger::Logger;
use logger::TracingLogger;
use persistence::cart_item::repository::CartItemRepositoryInMemory;

use business::application::cart_item::create::CreateCartItemUseCaseImpl;
use business::application::cart_item::delete::DeleteCartItemUseCaseImpl;
use business::application::cart_item::get_all::GetAllCartItemsUseCaseImpl;
use business::application::cart_item::get_by_id::GetCartItemByIdUseCaseImpl;
use business::application::cart_item::update::UpdateCartItemUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_item_api: crate::api::cart_item::routes::CartItemApi,
}

impl DependencyContainer {
    /// Wires every use case around one store owned by this container.
    pub fn new() -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let cart_item_repository = Arc::new(CartItemRepositoryInMemory::new());

        // Cart item use cases
        let create_use_case = Arc::new(CreateCartItemUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllCartItemsUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetCartItemByIdUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateCartItemUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteCartItemUseCaseImpl {
            repository: cart_item_repository,
            logger,
        });

        let cart_item_api = crate::api::cart_item::routes::CartItemApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            cart_item_api,
        }
    }
}
