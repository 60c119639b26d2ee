//! Error types for the Order actor.

use super::status::OrderStatus;
use crate::error::ErrorClass;
use thiserror::Error;

/// Errors that can occur during order operations, placement included.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A cart line references a menu item that does not exist.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// At least one cart line could not be covered by the current stock.
    #[error("Stock conflict: {0}")]
    StockConflict(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// A status string that is neither `Placed` nor `Completed`.
    #[error("Invalid status: {0:?}")]
    InvalidStatus(String),

    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn class(&self) -> ErrorClass {
        match self {
            OrderError::NotFound(_) | OrderError::ItemNotFound(_) => ErrorClass::NotFound,
            OrderError::StockConflict(_) => ErrorClass::Conflict,
            OrderError::ValidationError(_)
            | OrderError::InvalidStatus(_)
            | OrderError::IllegalTransition { .. } => ErrorClass::Validation,
            OrderError::ActorCommunicationError(_) => ErrorClass::Infrastructure,
        }
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
