//! Generic record store built on actors.
//!
//! Every collection (menu items, orders, admin accounts) is owned by one
//! [`ResourceActor`]. The actor processes requests one at a time, so a single
//! request, including a multi-record [`ResourceRequest::Batch`], is atomic with
//! respect to every other request on that collection.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns one collection
//! - [`ResourceClient`] - Typed handle used to send requests to the actor
//! - [`FrameworkError`] - Transport and lookup errors
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
