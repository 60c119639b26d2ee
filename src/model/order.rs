//! A student's order.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Only `status` changes after creation, and only through
//! [`OrderAction::Transition`](crate::order_actor::OrderAction::Transition).
use crate::model::MenuItemId;
use crate::order_actor::OrderStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque identifier for orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(format!("order_{id}"))
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of an order. `name` and `price` are snapshots taken when the
/// order was placed; later menu edits do not reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    /// `price × quantity`, or `None` if it does not fit in a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub student_name: String,
    pub roll_number: String,
    pub items: Vec<OrderLine>,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for recording a placed order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub student_name: String,
    pub roll_number: String,
    pub items: Vec<OrderLine>,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new Order in the `Placed` state.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            student_name: params.student_name,
            roll_number: params.roll_number,
            items: params.items,
            total_price: params.total_price,
            status: OrderStatus::Placed,
            created_at: params.created_at,
        }
    }
}
