//! Actions for the Cart actor.
//!
//! Every action answers with the resulting [`Cart`](crate::model::Cart).

use crate::model::{CartItem, Product, ProductId};

/// Operations that can be performed on the cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds `quantity` units of `product`, merging with an existing line.
    ///
    /// # Errors
    /// Fails with [`CartError::InvalidQuantity`](super::CartError::InvalidQuantity)
    /// when `quantity` is zero.
    Add { product: Product, quantity: u32 },
    /// Sets the quantity of an existing line; zero removes it.
    /// Unknown ids leave the cart unchanged.
    SetQuantity { product_id: ProductId, quantity: u32 },
    /// Removes a line if present.
    Remove(ProductId),
    /// Empties the cart.
    Clear,
    /// Takes ordered lines out after a checkout handoff. Units added after
    /// the order was built stay in the cart.
    Settle(Vec<CartItem>),
}
