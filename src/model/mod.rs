//! Pure data structures: catalog products, the cart and checkout orders.
//!
//! [`Cart`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait
//! in [`crate::cart_actor`].

pub mod cart;
pub mod order;
pub mod product;

pub use cart::*;
pub use order::*;
pub use product::*;
