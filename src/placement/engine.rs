//! # Order Placement Engine
//!
//! Turns a validated cart into exactly one `Placed` order, or into nothing.
//!
//! ## Protocol
//!
//! 1. One conditional batch debits every line (`count >= quantity` guard, per line).
//! 2. If any line did not match, a second batch restocks the lines that did, and
//!    the caller gets a conflict (or not-found for an unknown item).
//! 3. Otherwise the order is inserted with `status = Placed` and `createdAt = now`.
//!    If the insert fails, every line is restocked before the error is returned.
//!
//! Each batch is a single turn of the menu actor, so two carts racing for the
//! last units never both get them.

use super::cart::{PlaceOrderRequest, ValidatedOrder};
use crate::clients::{LineOutcome, MenuClient, OrderClient};
use crate::menu_actor::MenuError;
use crate::model::{MenuItemId, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use chrono::Utc;
use tracing::{error, info, instrument, warn};

#[derive(Clone)]
pub struct PlacementEngine {
    menu: MenuClient,
    orders: OrderClient,
    enforce_total_price: bool,
}

impl PlacementEngine {
    /// `enforce_total_price` turns a supplied total that disagrees with the
    /// cart into a validation error instead of a logged warning.
    pub fn new(menu: MenuClient, orders: OrderClient, enforce_total_price: bool) -> Self {
        Self {
            menu,
            orders,
            enforce_total_price,
        }
    }

    #[instrument(
        skip(self, request),
        fields(student = %request.student_name, lines = request.cart.len())
    )]
    pub async fn place_order(&self, request: PlaceOrderRequest) -> Result<OrderId, OrderError> {
        let order = request.validate()?;
        self.check_total(&order)?;

        let lines = order.stock_lines();
        let outcomes = self
            .menu
            .debit_all(&lines)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;

        let matched: Vec<(MenuItemId, u32)> = lines
            .iter()
            .zip(&outcomes)
            .filter(|(_, outcome)| outcome.is_ok())
            .map(|(line, _)| line.clone())
            .collect();

        if matched.len() < lines.len() {
            warn!(
                matched = matched.len(),
                lines = lines.len(),
                "Stock conflict, rolling back matched lines"
            );
            let rejection = first_rejection(&order, &outcomes);
            self.compensate(&matched).await?;
            return Err(rejection);
        }

        let created = self
            .orders
            .create_order(OrderCreate {
                student_name: order.student_name,
                roll_number: order.roll_number,
                items: order.lines,
                total_price: order.total_price,
                created_at: Utc::now(),
            })
            .await;

        match created {
            Ok(order_id) => {
                info!(%order_id, "Order placed");
                Ok(order_id)
            }
            Err(e) => {
                error!(error = %e, "Order insert failed after debit, restoring stock");
                self.compensate(&lines).await?;
                Err(e)
            }
        }
    }

    fn check_total(&self, order: &ValidatedOrder) -> Result<(), OrderError> {
        if order.total_matches() {
            return Ok(());
        }
        warn!(
            supplied = %order.total_price,
            computed = %order.computed_total,
            enforced = self.enforce_total_price,
            "Supplied totalPrice does not match cart"
        );
        if self.enforce_total_price {
            return Err(OrderError::ValidationError(format!(
                "totalPrice {} does not match cart total {}",
                order.total_price, order.computed_total
            )));
        }
        Ok(())
    }

    /// Restocks lines that were debited by a placement that will not complete.
    async fn compensate(&self, lines: &[(MenuItemId, u32)]) -> Result<(), OrderError> {
        if lines.is_empty() {
            return Ok(());
        }
        match self.menu.restock_all(lines).await {
            Ok(outcomes) => {
                let failed = outcomes.iter().filter(|o| o.is_err()).count();
                if failed == 0 {
                    info!(restored = lines.len(), "Stock compensation applied");
                    Ok(())
                } else {
                    error!(failed, lines = lines.len(), "Stock compensation incomplete");
                    Err(OrderError::ActorCommunicationError(format!(
                        "stock compensation failed for {failed} of {} lines",
                        lines.len()
                    )))
                }
            }
            Err(e) => {
                error!(error = %e, lines = lines.len(), "Stock compensation failed");
                Err(OrderError::ActorCommunicationError(format!(
                    "stock compensation failed: {e}"
                )))
            }
        }
    }
}

/// The error for the first cart line that was not debited.
fn first_rejection(order: &ValidatedOrder, outcomes: &[LineOutcome]) -> OrderError {
    let failure = order
        .lines
        .iter()
        .zip(outcomes)
        .find_map(|(line, outcome)| outcome.as_ref().err().map(|e| (line, e)));

    match failure {
        Some((line, MenuError::NotFound(_))) => OrderError::ItemNotFound(line.item_id.to_string()),
        Some((line, MenuError::InsufficientStock { requested, available })) => {
            OrderError::StockConflict(format!(
                "{} ({}): requested {requested}, available {available}",
                line.name, line.item_id
            ))
        }
        Some((line, other)) => OrderError::StockConflict(format!("{}: {other}", line.item_id)),
        None => OrderError::StockConflict("cart could not be reserved".to_string()),
    }
}
