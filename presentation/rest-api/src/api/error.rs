use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// One rejected request field.
#[derive(Object, Debug)]
pub struct FieldErrorResponse {
    pub field: String,
    pub code: String,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Per-field reasons, present on validation failures only
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<Vec<FieldErrorResponse>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            details: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
