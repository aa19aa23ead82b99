//! # Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; every cart operation carries its own
//! span and structured fields instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # operations and persistence results
//! RUST_LOG=debug cargo run    # full actions and snapshots
//! ```
//!
//! With `RUST_LOG=debug` a single add looks like:
//!
//! ```text
//! DEBUG add_item: Sending request product_id=1
//! DEBUG Action entity_type="Cart" action=Add { product: Product { .. }, quantity: 6 }
//! INFO  Action ok entity_type="Cart"
//! DEBUG Persisted entity_type="Cart"
//! ```
//!
//! Storage failures are logged at `error` by the actor even when no caller waits
//! on the write.

/// Install the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
