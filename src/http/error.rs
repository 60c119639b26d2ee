//! Domain errors as HTTP responses.
//!
//! Every error body is `{"message": ...}`. The status comes from the error's
//! [`ErrorClass`].

use crate::account_actor::AccountError;
use crate::error::ErrorClass;
use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    class: ErrorClass,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    pub fn from_class(class: ErrorClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from_class(ErrorClass::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::from_class(ErrorClass::NotFound, message)
    }

    pub fn class(&self) -> ErrorClass {
        self.class
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.class)
    }
}

pub fn status_for(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::Validation => StatusCode::BAD_REQUEST,
        ErrorClass::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::Conflict => StatusCode::CONFLICT,
        ErrorClass::Infrastructure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.class, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<MenuError> for ApiError {
    fn from(e: MenuError) -> Self {
        Self::from_class(e.class(), e.to_string())
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        Self::from_class(e.class(), e.to_string())
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        Self::from_class(e.class(), e.to_string())
    }
}

// Malformed bodies are the client's to fix, whatever axum's default status.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (class, status) = (self.class, self.status());
        if status.is_server_error() {
            tracing::error!(%class, %status, message = %self.message, "Request failed");
        } else {
            tracing::debug!(%class, %status, message = %self.message, "Request rejected");
        }
        (
            status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_actor::OrderStatus;

    #[test]
    fn test_each_class_has_its_status() {
        let cases = [
            (ApiError::from(OrderError::ValidationError("x".into())), 400),
            (ApiError::from(AccountError::InvalidCredentials), 401),
            (ApiError::from(OrderError::NotFound("order_1".into())), 404),
            (ApiError::from(OrderError::ItemNotFound("item_1".into())), 404),
            (ApiError::from(OrderError::StockConflict("x".into())), 409),
            (ApiError::from(MenuError::ActorCommunicationError("x".into())), 500),
            (
                ApiError::from(OrderError::IllegalTransition {
                    from: OrderStatus::Completed,
                    to: OrderStatus::Placed,
                }),
                400,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status().as_u16(), status, "{error}");
        }
    }

    #[test]
    fn test_display_names_the_class() {
        let error = ApiError::bad_request("Missing id");
        assert_eq!(error.class(), ErrorClass::Validation);
        assert_eq!(error.to_string(), "[validation] Missing id");
        assert_eq!(
            ApiError::from(OrderError::StockConflict("Tea".into())).class(),
            ErrorClass::Conflict
        );
    }
}
