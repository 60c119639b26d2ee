//! Request and response bodies that exist only at the HTTP boundary.

use crate::analytics::DailySummary;
use crate::model::{MenuItemId, OrderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `?id=` on the menu routes.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreatedResponse {
    pub message: String,
    pub inserted_id: MenuItemId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlacedResponse {
    pub message: String,
    pub order_id: OrderId,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdated {
    pub message: String,
    pub changed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentLookup {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub roll_number: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TopSeller {
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Serialize)]
pub struct TopEarner {
    pub name: String,
    pub revenue: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_revenue_today: Decimal,
    pub total_orders_today: usize,
    pub top_selling_item: Option<TopSeller>,
    pub most_profitable_item: Option<TopEarner>,
}

impl From<DailySummary> for AnalyticsResponse {
    fn from(summary: DailySummary) -> Self {
        Self {
            total_revenue_today: summary.total_revenue,
            total_orders_today: summary.total_orders,
            top_selling_item: summary.top_selling.map(|s| TopSeller {
                name: s.name,
                quantity: s.quantity,
            }),
            most_profitable_item: summary.most_profitable.map(|s| TopEarner {
                name: s.name,
                revenue: s.revenue,
            }),
        }
    }
}
