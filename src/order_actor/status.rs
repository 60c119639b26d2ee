//! Order Status Machine.
//!
//! ```text
//!   Placed ──complete──▶ Completed ──complete──▶ Completed (no-op)
//! ```
//!
//! `Placed` is the only initial state and `Completed` is terminal. Status
//! strings from the outside world are parsed with [`str::parse`], which only
//! accepts the two exact variant names.

use super::error::OrderError;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderStatus {
    Placed,
    Completed,
}

/// What a legal transition did to the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: OrderStatus, to: OrderStatus },
    Unchanged(OrderStatus),
}

impl Transition {
    pub fn changed(&self) -> bool {
        matches!(self, Transition::Advanced { .. })
    }
}

impl OrderStatus {
    /// Checks `self -> target` against the transition table.
    ///
    /// Re-applying the current status is accepted and reported as
    /// [`Transition::Unchanged`].
    pub fn transition_to(self, target: OrderStatus) -> Result<Transition, OrderError> {
        use OrderStatus::*;
        match (self, target) {
            (Placed, Completed) => Ok(Transition::Advanced {
                from: Placed,
                to: Completed,
            }),
            (from, to) if from == to => Ok(Transition::Unchanged(from)),
            (from, to) => Err(OrderError::IllegalTransition { from, to }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Placed" => Ok(OrderStatus::Placed),
            "Completed" => Ok(OrderStatus::Completed),
            other => Err(OrderError::InvalidStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_advances_to_completed() {
        let t = OrderStatus::Placed
            .transition_to(OrderStatus::Completed)
            .unwrap();
        assert!(t.changed());
        assert_eq!(
            t,
            Transition::Advanced {
                from: OrderStatus::Placed,
                to: OrderStatus::Completed
            }
        );
    }

    #[test]
    fn test_same_state_is_a_no_op() {
        for status in [OrderStatus::Placed, OrderStatus::Completed] {
            let t = status.transition_to(status).unwrap();
            assert_eq!(t, Transition::Unchanged(status));
            assert!(!t.changed());
        }
    }

    #[test]
    fn test_no_way_back_to_placed() {
        let err = OrderStatus::Completed
            .transition_to(OrderStatus::Placed)
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::IllegalTransition {
                from: OrderStatus::Completed,
                to: OrderStatus::Placed
            }
        );
    }

    #[test]
    fn test_parse_accepts_only_exact_names() {
        assert_eq!("Placed".parse::<OrderStatus>(), Ok(OrderStatus::Placed));
        assert_eq!(
            "Completed".parse::<OrderStatus>(),
            Ok(OrderStatus::Completed)
        );
        for bad in ["completed", "Cancelled", "", " Placed"] {
            assert!(matches!(
                bad.parse::<OrderStatus>(),
                Err(OrderError::InvalidStatus(_))
            ));
        }
    }

    #[test]
    fn test_serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Completed).unwrap(),
            serde_json::json!("Completed")
        );
    }
}
