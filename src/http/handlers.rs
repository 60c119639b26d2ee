//! Route handlers. Each one is a thin mapping from HTTP onto a client call.

use super::dto::*;
use super::error::ApiError;
use super::AppState;
use crate::analytics;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, Order, OrderId};
use crate::order_actor::OrderStatus;
use crate::placement::PlaceOrderRequest;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Local;
use std::sync::Arc;

type Shared = State<Arc<AppState>>;
type Body<T> = Result<Json<T>, JsonRejection>;

fn required_id(query: Result<Query<IdQuery>, QueryRejection>) -> Result<MenuItemId, ApiError> {
    let Query(query) = query?;
    match query.id {
        Some(id) if !id.trim().is_empty() => Ok(MenuItemId::from(id)),
        _ => Err(ApiError::bad_request("Missing id")),
    }
}

pub async fn list_menu(State(state): Shared) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.menu.list_menu().await?))
}

pub async fn create_menu_item(
    State(state): Shared,
    body: Body<MenuItemCreate>,
) -> Result<(StatusCode, Json<ItemCreatedResponse>), ApiError> {
    let Json(params) = body?;
    let inserted_id = state.menu.create_item(params).await?;
    Ok((
        StatusCode::CREATED,
        Json(ItemCreatedResponse {
            message: "Menu item added".to_string(),
            inserted_id,
        }),
    ))
}

pub async fn update_menu_item(
    State(state): Shared,
    query: Result<Query<IdQuery>, QueryRejection>,
    body: Body<MenuItemUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = required_id(query)?;
    let Json(update) = body?;
    state.menu.update_item(id, update).await?;
    Ok(Json(MessageResponse::new("Menu item updated")))
}

pub async fn delete_menu_item(
    State(state): Shared,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = required_id(query)?;
    state.menu.delete_item(id).await?;
    Ok(Json(MessageResponse::new("Menu item deleted")))
}

pub async fn list_orders(State(state): Shared) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.list_orders().await?))
}

pub async fn place_order(
    State(state): Shared,
    body: Body<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderPlacedResponse>), ApiError> {
    let Json(request) = body?;
    let order_id = state.placement.place_order(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(OrderPlacedResponse {
            message: "Order placed".to_string(),
            order_id,
        }),
    ))
}

pub async fn get_order(
    State(state): Shared,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.get_order(OrderId::from(order_id)).await?))
}

pub async fn update_order_status(
    State(state): Shared,
    Path(order_id): Path<String>,
    body: Body<StatusUpdate>,
) -> Result<Json<StatusUpdated>, ApiError> {
    let Json(update) = body?;
    let status: OrderStatus = update
        .status
        .ok_or_else(|| ApiError::bad_request("Missing status"))?
        .parse()?;
    let transition = state
        .orders
        .update_status(OrderId::from(order_id), status)
        .await?;
    Ok(Json(StatusUpdated {
        message: format!("Order status is {status}"),
        changed: transition.changed(),
    }))
}

pub async fn my_orders(
    State(state): Shared,
    body: Body<StudentLookup>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let Json(lookup) = body?;
    let orders = state
        .orders
        .orders_for_student(&lookup.student_name, &lookup.roll_number)
        .await?;
    if orders.is_empty() {
        return Err(ApiError::not_found("No orders found for this student"));
    }
    Ok(Json(orders))
}

pub async fn analytics_today(State(state): Shared) -> Result<Json<AnalyticsResponse>, ApiError> {
    let today = Local::now().date_naive();
    let summary = analytics::summarize_day(&state.orders, today, &Local).await?;
    Ok(Json(summary.into()))
}

pub async fn login(
    State(state): Shared,
    body: Body<LoginRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(credentials) = body?;
    state
        .accounts
        .login(&credentials.email, &credentials.password)
        .await?;
    Ok(Json(MessageResponse::new("Login successful")))
}
