use std::fmt;

/// A single field that failed validation, with a code-style reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: &'static str,
}

impl FieldViolation {
    pub fn new(field: &'static str, code: &'static str) -> Self {
        Self { field, code }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.code)
    }
}

/// A path segment that is not a canonical cart item id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cart_item.invalid_id")]
pub struct InvalidCartItemId;

#[derive(Debug, thiserror::Error)]
pub enum CartItemError {
    #[error("cart_item.validation")]
    Validation(Vec<FieldViolation>),
    #[error("cart_item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl CartItemError {
    /// Field-level details for validation failures, empty for other kinds.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            CartItemError::Validation(violations) => violations,
            _ => &[],
        }
    }
}
