//! # Smart Canteen
//!
//! Backend for a school canteen: students browse the menu and place orders,
//! admins manage stock and fulfil orders, and a dashboard shows the day's sales.
//!
//! ## Design
//!
//! Each record collection (menu items, orders, admin accounts) is owned by one
//! actor. An actor handles one request at a time, so a request is atomic with
//! respect to every other request on the same collection. Order placement
//! relies on that: all of a cart's stock decrements travel as one batch and
//! are applied in a single actor turn.
//!
//! ## Module Tour
//!
//! ### 1. The Record Store ([`framework`])
//! The generic `ResourceActor<T>` and its typed `ResourceClient<T>`.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor),
//!   [`ResourceRequest::Batch`](framework::ResourceRequest::Batch).
//!
//! ### 2. The Collections ([`menu_actor`], [`order_actor`], [`account_actor`])
//! `ActorEntity` implementations plus each collection's actions and error type.
//! The Stock Ledger lives in [`model::Stock`]; the Order Status Machine in
//! [`order_actor::status`].
//!
//! ### 3. The Interface ([`clients`])
//! Domain clients that hide message passing and return domain errors.
//!
//! ### 4. The Core Logic ([`placement`], [`analytics`])
//! - [`PlacementEngine`](placement::PlacementEngine): debit, compensate on conflict, record.
//! - [`aggregate`](analytics::aggregate): the daily summary reducer.
//!
//! ### 5. The Outside ([`lifecycle`], [`config`], [`http`])
//! [`CanteenSystem`](lifecycle::CanteenSystem) spawns and wires the actors;
//! [`http`] exposes them as a JSON API.
//!
//! ## Errors
//!
//! Every domain error reports an [`ErrorClass`](error::ErrorClass): validation,
//! conflict, not found, unauthorized or infrastructure. The HTTP layer maps the
//! class to a status code, so a stock conflict (409) is always distinguishable
//! from a malformed cart (400).
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info CANTEEN_ADMIN_EMAIL=admin@school.edu CANTEEN_ADMIN_PASSWORD=... cargo run
//! ```

pub mod account_actor;
pub mod analytics;
pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod placement;
