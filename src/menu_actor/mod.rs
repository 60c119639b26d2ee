//! # Menu Actor
//!
//! Owns the menu collection: dishes, their prices and the stock ledger.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`] type for type-safe error handling
//! - [`actions`] - [`MenuAction`] and [`MenuActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Stock Actions
//!
//! ```rust,ignore
//! // Read-only
//! let count = menu_client.check_stock(item_id).await?;
//!
//! // Guarded decrement for every line of a cart, applied in one store turn
//! let outcomes = menu_client.debit_all(&lines).await?;
//! ```
//!
//! Because the actor handles one request at a time, two carts competing for the
//! last units of a dish are serialized: the first batch takes them and the
//! second sees the shortfall.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::MenuItem;

/// Creates a new menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(buffer_size)
}
