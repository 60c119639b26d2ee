//! Error types for the account actor.

use crate::error::ErrorClass;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// No account matches the supplied email and password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl AccountError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AccountError::InvalidCredentials => ErrorClass::Unauthorized,
            AccountError::ValidationError(_) => ErrorClass::Validation,
            AccountError::ActorCommunicationError(_) => ErrorClass::Infrastructure,
        }
    }
}

impl From<String> for AccountError {
    fn from(msg: String) -> Self {
        AccountError::ActorCommunicationError(msg)
    }
}
