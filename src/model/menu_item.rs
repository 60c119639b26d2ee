//! A dish on the canteen menu.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for MenuItem`](#impl-ActorEntity-for-MenuItem) for details on:
//! - Creation parameters ([`MenuItemCreate`])
//! - Update parameters ([`MenuItemUpdate`])
//! - Stock actions ([`MenuAction`](crate::menu_actor::MenuAction))
use crate::model::Stock;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque identifier for menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(format!("item_{id}"))
    }
}

impl From<String> for MenuItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    #[serde(flatten)]
    pub stock: Stock,
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the store)
    /// * `name` - Dish name
    /// * `price` - Unit price
    /// * `category` - Free-form label such as "Snacks"
    /// * `count` - Available quantity
    pub fn new(
        id: MenuItemId,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        count: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            stock: Stock::new(count),
            created_at: Utc::now(),
        }
    }

    pub fn count(&self) -> u32 {
        self.stock.count()
    }

    pub fn in_stock(&self) -> bool {
        self.stock.in_stock()
    }
}

/// Payload for adding a dish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub count: u32,
}

/// Full replacement of an item's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub count: u32,
}
