//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are written once. The only mutation is a status transition, and it
//! goes through the transition table in [`status`](super::status).

use super::error::OrderError;
use super::status::{OrderStatus, Transition};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use std::convert::Infallible;

/// Custom actions for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Transition(OrderStatus),
}

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = Transition;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "order must contain at least one line".to_string(),
            ));
        }
        Ok(Self::new(id, params))
    }

    fn on_update(&mut self, update: Infallible) -> Result<(), OrderError> {
        match update {}
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<Transition, OrderError> {
        match action {
            OrderAction::Transition(target) => {
                let transition = self.status.transition_to(target)?;
                self.status = target;
                Ok(transition)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemId, OrderLine};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn order() -> Order {
        Order::from_create_params(
            OrderId::from(1),
            OrderCreate {
                student_name: "Asha".to_string(),
                roll_number: "21CS042".to_string(),
                items: vec![OrderLine {
                    item_id: MenuItemId::from(1),
                    name: "Idli".to_string(),
                    price: dec!(30),
                    quantity: 2,
                }],
                total_price: dec!(60),
                created_at: Utc::now(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_order_starts_placed() {
        assert_eq!(order().status, OrderStatus::Placed);
    }

    #[test]
    fn test_empty_order_is_rejected() {
        let params = OrderCreate {
            student_name: "Asha".to_string(),
            roll_number: "21CS042".to_string(),
            items: vec![],
            total_price: dec!(0),
            created_at: Utc::now(),
        };
        assert!(matches!(
            Order::from_create_params(OrderId::from(1), params),
            Err(OrderError::ValidationError(_))
        ));
    }

    #[test]
    fn test_complete_then_complete_again() {
        let mut order = order();
        let first = order
            .handle_action(OrderAction::Transition(OrderStatus::Completed))
            .unwrap();
        assert!(first.changed());
        let snapshot = order.clone();

        let second = order
            .handle_action(OrderAction::Transition(OrderStatus::Completed))
            .unwrap();
        assert!(!second.changed());
        assert_eq!(order, snapshot);
    }

    #[test]
    fn test_reverse_transition_leaves_status() {
        let mut order = order();
        order
            .handle_action(OrderAction::Transition(OrderStatus::Completed))
            .unwrap();
        let err = order
            .handle_action(OrderAction::Transition(OrderStatus::Placed))
            .unwrap_err();
        assert!(matches!(err, OrderError::IllegalTransition { .. }));
        assert_eq!(order.status, OrderStatus::Completed);
    }
}
