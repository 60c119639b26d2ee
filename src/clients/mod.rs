//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client turns [`FrameworkError`](crate::framework::FrameworkError) into
//! its collection's own error type, so callers see `MenuError`, `OrderError` or
//! `AccountError` and can ask for their [`ErrorClass`](crate::error::ErrorClass).

pub mod account_client;
pub mod actor_client;
pub mod menu_client;
pub mod order_client;

pub use account_client::*;
pub use actor_client::ActorClient;
pub use menu_client::*;
pub use order_client::*;
