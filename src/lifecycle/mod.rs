//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors behind the canteen.
//!
//! ```text
//!   menu actor ◀── MenuClient ──┐
//!                               ├── PlacementEngine
//!   order actor ◀─ OrderClient ─┘
//!   account actor ◀─ AccountClient
//! ```
//!
//! Actors are created without dependencies and spawned immediately. The
//! placement engine holds clones of the menu and order clients, so the
//! dependency graph stays acyclic and shutdown is just dropping every client
//! and awaiting the actor tasks.

pub mod canteen_system;
pub mod tracing;

pub use canteen_system::*;
pub use self::tracing::setup_tracing;
