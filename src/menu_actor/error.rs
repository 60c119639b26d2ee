//! Error types for the menu actor.

use crate::error::ErrorClass;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// A stock operation was asked to move zero units.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The item data provided is invalid.
    #[error("Menu item validation error: {0}")]
    ValidationError(String),

    /// The menu store could not be reached.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl MenuError {
    pub fn class(&self) -> ErrorClass {
        match self {
            MenuError::NotFound(_) => ErrorClass::NotFound,
            MenuError::InsufficientStock { .. } => ErrorClass::Conflict,
            MenuError::InvalidQuantity(_) | MenuError::ValidationError(_) => ErrorClass::Validation,
            MenuError::ActorCommunicationError(_) => ErrorClass::Infrastructure,
        }
    }
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}
