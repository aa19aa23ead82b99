//! # Storefront Cart
//!
//! The shopping cart of a mobile beverage storefront, with checkout by messaging
//! handoff.
//!
//! The cart lives in a single Tokio actor. Screens talk to it through a
//! [`CartClient`](clients::CartClient); every change is applied in memory,
//! answered immediately, and then mirrored to on-device key-value storage. On
//! start the actor restores the mirror, so a cart survives restarts.
//!
//! ## Architecture Notes
//!
//! ### 1. One owner for the cart
//! All reads and writes go through the actor's channel and are handled in order.
//! Concurrent screens never race each other, and writes to storage happen in the
//! same order as the changes that caused them.
//!
//! ### 2. Memory first, storage second
//! A mutation returns the new cart together with a durability handle. Awaiting
//! the handle tells you whether the write reached storage; ignoring it is fine.
//! A failed write is logged and leaves the in-memory cart as the source of truth.
//!
//! ### 3. Context injection
//! Storage is handed to the actor when it starts (`run(context)`), not when it is
//! built. Tests swap in [`MemoryStore`](storage::MemoryStore) or a
//! [`MockClient`](framework::mock::MockClient) without touching the cart logic.
//!
//! ### 4. Observability
//! `tracing` spans and structured fields everywhere. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`] - the generic `ResourceActor<T>` and its durability handles
//! - [`model`] - products, cart lines, orders
//! - [`cart_actor`] - the cart's actions, errors and persistence hooks
//! - [`clients`] - typed client API over the actor
//! - [`storage`] - key-value backends and the cart mirror encoding
//! - [`checkout`] - form validation, order message, deep link
//! - [`config`] - environment configuration
//! - [`lifecycle`] - starting and stopping the actor, tracing setup
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod storage;
