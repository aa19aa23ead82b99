//! # Checkout
//!
//! Checkout is a handoff, not a transaction: the order is formatted as a
//! message, opened as a messaging deep link addressed to the store, and the
//! ordered lines leave the cart. No confirmation comes back.
//!
//! - [`CheckoutForm`] - delivery details and payment method, with validation
//! - [`order_summary`] - the message text
//! - [`deep_link`] / [`encode_uri_component`] - link construction
//! - [`MessageLauncher`] - seam to the platform that opens the link
//! - [`CheckoutService`] - ties the above to a [`CartClient`](crate::clients::CartClient)

pub mod error;
pub mod form;
pub mod launcher;
pub mod link;
pub mod service;
pub mod summary;

pub use error::CheckoutError;
pub use form::CheckoutForm;
pub use launcher::{LaunchError, LogLauncher, MessageLauncher};
pub use link::{deep_link, encode_uri_component};
pub use service::{CheckoutService, PlacedOrder};
pub use summary::{money, order_summary};
