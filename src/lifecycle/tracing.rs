//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); the actor
//! loop tags every line with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final collection size
//! - **Record Operations**: Create, Get, List, Update, Delete, Action and Batch
//! - **Placement**: conflicts, compensation and `totalPrice` mismatches
//! - **HTTP**: one span per request from `tower-http`'s `TraceLayer`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! RUST_LOG=smart_canteen::placement=debug,info cargo run
//! ```
//!
//! ## Placement Trace Example
//!
//! A cart with two lines where the second item ran out, at `RUST_LOG=info`:
//!
//! ```text
//! WARN place_order{student=Asha lines=2}: Batch partially applied entity_type="MenuItem" lines=2 applied=1
//! WARN place_order{student=Asha lines=2}: Stock conflict, rolling back matched lines matched=1 lines=2
//! INFO place_order{student=Asha lines=2}: Batch ok entity_type="MenuItem" lines=1 applied=1
//! INFO place_order{student=Asha lines=2}: Stock compensation applied restored=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
