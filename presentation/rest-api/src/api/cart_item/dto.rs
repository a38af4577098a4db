use poem_openapi::Object;
use std::str::FromStr;

use rust_decimal::Decimal;

use business::domain::cart_item::errors::{CartItemError, FieldViolation};
use business::domain::cart_item::model::{CartItem, CartItemId};

/// Body accepted by create and update.
#[derive(Debug, Clone, Object)]
pub struct CartItemRequest {
    /// Ignored: the server assigns ids on create and takes the path id on update
    pub id: Option<i64>,
    /// Item name (cannot be empty)
    pub name: String,
    /// Number of units (must be greater than zero)
    pub quantity: i32,
    /// Unit price (must not be negative)
    pub price: f64,
}

impl CartItemRequest {
    /// Validates the body into a domain item, collecting every bad field.
    pub fn into_domain(self) -> Result<CartItem, CartItemError> {
        // Negative or out-of-range ids can never name a stored item
        let client_id = self
            .id
            .and_then(|id| u64::try_from(id).ok())
            .map(CartItemId::new);

        let price = if self.price < 0.0 {
            Err(FieldViolation::new("price", "cart_item.price_negative"))
        } else {
            decimal_from_json_number(self.price)
                .ok_or_else(|| FieldViolation::new("price", "cart_item.price_invalid"))
        };

        let item = match price {
            Ok(price) => CartItem::new(self.name, self.quantity, price)?,
            Err(price_violation) => {
                let mut violations = CartItem::new(self.name, self.quantity, Decimal::ZERO)
                    .err()
                    .map(|e| e.violations().to_vec())
                    .unwrap_or_default();
                violations.push(price_violation);
                return Err(CartItemError::Validation(violations));
            }
        };

        Ok(match client_id {
            Some(id) => item.with_id(id),
            None => item,
        })
    }
}

/// Exact decimal for a JSON number, or `None` when the decimal would not read
/// back as the same number (too small, too large or too precise).
fn decimal_from_json_number(value: f64) -> Option<Decimal> {
    let decimal = Decimal::from_str(&value.to_string()).ok()?;
    let round_trip = decimal.to_string().parse::<f64>().ok()?;
    (round_trip == value).then_some(decimal)
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Cart item identifier
    pub id: Option<u64>,
    /// Item name
    pub name: String,
    /// Number of units
    pub quantity: i32,
    /// Unit price
    pub price: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.map(|id| id.value()),
            name: item.name,
            quantity: item.quantity,
            price: item.price.to_string().parse().unwrap_or_default(),
        }
    }
}
