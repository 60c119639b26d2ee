//! Order placement: the cart a student submits and the engine that turns it
//! into stock debits plus one order record.

pub mod cart;
pub mod engine;

pub use cart::*;
pub use engine::*;
