//! # Lifecycle
//!
//! Starting and stopping the cart actor.
//!
//! The actor is created first and given its dependencies when it starts: the
//! storage backend and key travel in a [`CartContext`](crate::cart_actor::CartContext)
//! passed to `run`. [`StoreSystem`] does that wiring and owns the task handle.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront_cart::checkout::LogLauncher;
//! use storefront_cart::config::StoreConfig;
//! use storefront_cart::lifecycle::StoreSystem;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::from_env()?;
//! let system = StoreSystem::open(&config).await?;
//! let checkout = system.checkout(Arc::new(LogLauncher), &config);
//! println!("{}", checkout.contact_link());
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Shutdown
//!
//! Dropping every [`CartClient`](crate::clients::CartClient) closes the actor's
//! channel. The actor finishes the requests already queued, including their
//! writes, and exits. [`StoreSystem::shutdown`] drops its own client and awaits
//! the task. A [`CheckoutService`](crate::checkout::CheckoutService) holds a
//! client clone, so drop it first.

pub mod store_system;
pub mod tracing;

pub use store_system::*;
pub use tracing::*;
