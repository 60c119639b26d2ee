//! Cart value objects submitted by a student, and their validation.

use crate::model::{MenuItemId, OrderLine};
use crate::order_actor::OrderError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Item snapshot carried by a cart line. `name` and `price` are copied into
/// the order as they are here, without re-reading the menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartLine {
    pub item: CartItem,
    #[serde(default)]
    pub quantity: u32,
}

/// A student's order request as it arrives from the client.
///
/// Every field defaults when missing so that validation, not deserialization,
/// reports what is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub cart: Vec<CartLine>,
    #[serde(default)]
    pub total_price: Option<Decimal>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub student_name: String,
    pub roll_number: String,
    pub lines: Vec<OrderLine>,
    /// As supplied by the client.
    pub total_price: Decimal,
    /// `Σ price × quantity` over `lines`.
    pub computed_total: Decimal,
}

impl ValidatedOrder {
    /// `(item, quantity)` pairs in cart order, as the stock batch expects them.
    pub fn stock_lines(&self) -> Vec<(MenuItemId, u32)> {
        self.lines
            .iter()
            .map(|line| (line.item_id.clone(), line.quantity))
            .collect()
    }

    pub fn total_matches(&self) -> bool {
        self.total_price == self.computed_total
    }
}

fn invalid(msg: impl Into<String>) -> OrderError {
    OrderError::ValidationError(msg.into())
}

impl PlaceOrderRequest {
    pub fn validate(self) -> Result<ValidatedOrder, OrderError> {
        if self.student_name.trim().is_empty() || self.roll_number.trim().is_empty() {
            return Err(invalid("studentName and rollNumber are required"));
        }
        if self.cart.is_empty() {
            return Err(invalid("cart must not be empty"));
        }
        let total_price = self
            .total_price
            .ok_or_else(|| invalid("totalPrice is required"))?;
        if total_price < Decimal::ZERO {
            return Err(invalid("totalPrice must not be negative"));
        }

        let mut lines = Vec::with_capacity(self.cart.len());
        let mut computed_total = Decimal::ZERO;
        for (index, line) in self.cart.into_iter().enumerate() {
            if line.item.id.trim().is_empty() {
                return Err(invalid(format!("cart line {index}: item id is required")));
            }
            if line.quantity == 0 {
                return Err(invalid(format!(
                    "cart line {index}: quantity must be greater than zero"
                )));
            }
            if line.item.price < Decimal::ZERO {
                return Err(invalid(format!("cart line {index}: price must not be negative")));
            }
            let line = OrderLine {
                item_id: MenuItemId::from(line.item.id),
                name: line.item.name,
                price: line.item.price,
                quantity: line.quantity,
            };
            computed_total = line
                .subtotal()
                .and_then(|subtotal| computed_total.checked_add(subtotal))
                .ok_or_else(|| invalid(format!("cart line {index}: amount out of range")))?;
            lines.push(line);
        }

        Ok(ValidatedOrder {
            student_name: self.student_name,
            roll_number: self.roll_number,
            lines,
            total_price,
            computed_total,
        })
    }
}
