//! Cross-cutting error classes.
//!
//! Every actor keeps its own error enum. Each of them reports one of these
//! classes so callers (the HTTP layer in particular) can react without
//! matching on every variant.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Missing or malformed input. Fix the request, do not retry it as-is.
    Validation,
    /// Stock changed underneath the request. Re-read and let the user revise.
    Conflict,
    /// The referenced order or item does not exist.
    NotFound,
    /// Credentials did not match.
    Unauthorized,
    /// The store could not serve the request. Safe to retry later.
    Infrastructure,
}

impl Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorClass::Validation => "validation",
            ErrorClass::Conflict => "conflict",
            ErrorClass::NotFound => "not_found",
            ErrorClass::Unauthorized => "unauthorized",
            ErrorClass::Infrastructure => "infrastructure",
        };
        f.write_str(name)
    }
}
