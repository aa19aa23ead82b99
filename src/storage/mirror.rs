//! Encoding of the cart's durable mirror.
//!
//! The mirror is a JSON array of `{ "product": {...}, "quantity": n }` records,
//! with the full product embedded in each record. An empty or whitespace-only
//! value reads back as an empty cart.

use crate::model::Cart;

pub fn encode(cart: &Cart) -> Result<String, serde_json::Error> {
    serde_json::to_string(cart)
}

/// Decodes a mirror. Zero and negative quantities are dropped and repeated
/// product ids are merged (see [`Cart`]'s `From<Vec<CartItem>>`).
pub fn decode(raw: &str) -> Result<Cart, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Cart::new());
    }
    serde_json::from_str(raw)
}
