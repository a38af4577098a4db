use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart_item::model::CartItemId;
use business::domain::cart_item::use_cases::create::{CreateCartItemParams, CreateCartItemUseCase};
use business::domain::cart_item::use_cases::delete::{DeleteCartItemParams, DeleteCartItemUseCase};
use business::domain::cart_item::use_cases::get_all::GetAllCartItemsUseCase;
use business::domain::cart_item::use_cases::get_by_id::{
    GetCartItemByIdParams, GetCartItemByIdUseCase,
};
use business::domain::cart_item::use_cases::update::{UpdateCartItemParams, UpdateCartItemUseCase};

use crate::api::cart_item::dto::{CartItemRequest, CartItemResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartItemApi {
    create_use_case: Arc<dyn CreateCartItemUseCase>,
    get_all_use_case: Arc<dyn GetAllCartItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetCartItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateCartItemUseCase>,
    delete_use_case: Arc<dyn DeleteCartItemUseCase>,
}

impl CartItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartItemUseCase>,
        get_all_use_case: Arc<dyn GetAllCartItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetCartItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateCartItemUseCase>,
        delete_use_case: Arc<dyn DeleteCartItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<CartItemId, Json<ErrorResponse>> {
    raw.parse::<CartItemId>()
        .map_err(|_| Json(ErrorResponse::new("ValidationError", "cart_item.invalid_id")))
}

/// Shopping cart API
///
/// Endpoints for creating, reading, updating, and deleting cart line items.
#[OpenApi]
impl CartItemApi {
    /// List cart items
    ///
    /// Returns every item currently in the cart.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_all(&self) -> GetAllCartItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => {
                let responses: Vec<CartItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                GetAllCartItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCartItemsResponse::InternalError(json)
            }
        }
    }

    /// Get a cart item by ID
    #[oai(path = "/cart/:id", method = "get", tag = "ApiTags::Cart")]
    async fn get_by_id(&self, id: Path<String>) -> GetCartItemByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetCartItemByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetCartItemByIdParams { id })
            .await
        {
            Ok(item) => GetCartItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartItemByIdResponse::NotFound(json),
                    _ => GetCartItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item to the cart
    ///
    /// The server assigns the id; any id in the body is ignored.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Cart")]
    async fn create(&self, body: Json<CartItemRequest>) -> CreateCartItemResponse {
        let item = match body.0.into_domain() {
            Ok(item) => item,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return CreateCartItemResponse::BadRequest(json);
            }
        };

        match self
            .create_use_case
            .execute(CreateCartItemParams { item })
            .await
        {
            Ok(item) => CreateCartItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCartItemResponse::BadRequest(json),
                    _ => CreateCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a cart item
    ///
    /// Full replacement of name, quantity and price. The path id always wins
    /// over an id in the body.
    #[oai(path = "/cart/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update(&self, id: Path<String>, body: Json<CartItemRequest>) -> UpdateCartItemResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateCartItemResponse::BadRequest(json),
        };

        let item = match body.0.into_domain() {
            Ok(item) => item,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return UpdateCartItemResponse::BadRequest(json);
            }
        };

        match self
            .update_use_case
            .execute(UpdateCartItemParams { id, item })
            .await
        {
            Ok(item) => UpdateCartItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCartItemResponse::BadRequest(json),
                    404 => UpdateCartItemResponse::NotFound(json),
                    _ => UpdateCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a cart item
    #[oai(path = "/cart/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn delete(&self, id: Path<String>) -> DeleteCartItemResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteCartItemResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteCartItemParams { id })
            .await
        {
            Ok(()) => DeleteCartItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCartItemResponse::NotFound(json),
                    _ => DeleteCartItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCartItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
