//! Records and payloads held by the store, plus the [`Stock`] ledger value.

pub mod account;
pub mod menu_item;
pub mod order;
pub mod stock;

pub use account::*;
pub use menu_item::*;
pub use order::*;
pub use stock::*;
