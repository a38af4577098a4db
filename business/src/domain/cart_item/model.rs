use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::errors::{CartItemError, FieldViolation, InvalidCartItemId};

/// Store-assigned identifier of a cart item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartItemId(u64);

impl CartItemId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CartItemId {
    type Err = InvalidCartItemId;

    /// Accepts plain decimal digits only, so `+1` or ` 1` never alias id 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidCartItemId);
        }
        s.parse::<u64>().map(Self).map_err(|_| InvalidCartItemId)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// `None` until the store assigns one.
    pub id: Option<CartItemId>,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

impl CartItem {
    /// Builds an unsaved item, reporting every invalid field at once.
    pub fn new(name: String, quantity: i32, price: Decimal) -> Result<Self, CartItemError> {
        let mut violations = Vec::new();

        if name.trim().is_empty() {
            violations.push(FieldViolation::new("name", "cart_item.name_empty"));
        }
        if quantity <= 0 {
            violations.push(FieldViolation::new(
                "quantity",
                "cart_item.quantity_not_positive",
            ));
        }
        if price < Decimal::ZERO {
            violations.push(FieldViolation::new("price", "cart_item.price_negative"));
        }

        if !violations.is_empty() {
            return Err(CartItemError::Validation(violations));
        }

        Ok(Self {
            id: None,
            name,
            quantity,
            price,
        })
    }

    pub fn with_id(self, id: CartItemId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn without_id(self) -> Self {
        Self { id: None, ..self }
    }
}
