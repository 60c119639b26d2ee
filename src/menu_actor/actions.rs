//! Stock actions for the menu collection.
//!
//! These run inside the menu actor, one record at a time, and are the only
//! path by which order placement touches a [`MenuItem`](crate::model::MenuItem)'s count.

/// Custom actions for menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Reads the current count without modifying it.
    CheckStock,
    /// Conditional decrement: applies only if `count >= quantity`.
    ///
    /// # Errors
    /// Fails with [`MenuError::InsufficientStock`](super::MenuError::InsufficientStock)
    /// and leaves the item untouched when the guard does not hold.
    DecrementIfAvailable(u32),
    /// Compensating increment for a decrement that must be undone.
    Restock(u32),
}

/// Results from MenuActions - variants match 1:1 with MenuAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuActionResult {
    CheckStock(u32),
    /// Remaining count after the decrement.
    Decremented(u32),
    /// Count after the increment.
    Restocked(u32),
}
