//! # Order Actor
//!
//! Owns the order log.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`status`] - the Order Status Machine ([`OrderStatus`], [`Transition`])
//! - [`error`] - [`OrderError`], shared with the placement engine
//!
//! Orders are only ever inserted by the placement engine. After that the
//! single permitted change is `Placed -> Completed`, requested by an admin.

pub mod entity;
pub mod error;
pub mod status;

pub use entity::OrderAction;
pub use error::*;
pub use status::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
