//! # Cart Actor
//!
//! The cart store: one actor owning the shopper's [`Cart`], mirroring it to
//! key-value storage after every change.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type
//! - [`actions`] - [`CartAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_cart::cart_actor::{self, CartContext};
//! use storefront_cart::clients::CartClient;
//! use storefront_cart::model::Product;
//! use storefront_cart::storage::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_actor::new(32);
//!     let client = CartClient::new(generic_client);
//!
//!     let context = CartContext::new(Arc::new(MemoryStore::new()), "cart");
//!     tokio::spawn(actor.run(context));
//!
//!     let update = client.add_item(Product::new("1", "Cerveja", "cervejas", 4.5), 6).await?;
//!     assert_eq!(update.cart.item_count(), 6);
//!     update.persisted().await;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::CartContext;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size)
}
