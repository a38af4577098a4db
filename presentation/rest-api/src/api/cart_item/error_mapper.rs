use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart_item::errors::CartItemError;

use crate::api::error::{ErrorResponse, FieldErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CartItemError::Validation(violations) => {
                let details = violations
                    .into_iter()
                    .map(|v| FieldErrorResponse {
                        field: v.field.to_string(),
                        code: v.code.to_string(),
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: "cart_item.validation".to_string(),
                        details: Some(details),
                    }),
                )
            }
            CartItemError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", "cart_item.not_found")),
            ),
            CartItemError::Repository(err) => {
                tracing::error!(error = %err, "cart item repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("InternalError", "repository.persistence")),
                )
            }
        }
    }
}
