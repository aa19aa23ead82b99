//! [`ActorEntity`] implementation for [`Cart`].
//!
//! The cart is restored from, and written to, a single key of a
//! [`KeyValueStore`] supplied through [`CartContext`]. Storage problems never
//! reach the caller: a failed read yields an empty cart, and a failed write is
//! reported through the durability handle while the in-memory cart stays as it is.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use super::actions::CartAction;
use super::error::CartError;
use crate::framework::{ActorEntity, Outcome};
use crate::model::Cart;
use crate::storage::{mirror, KeyValueStore};

/// Dependencies injected into the cart actor.
#[derive(Clone)]
pub struct CartContext {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartContext {
    /// `key` is the storage key of the durable mirror.
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Action = CartAction;
    type ActionResult = Cart;
    type Context = CartContext;
    type Error = CartError;

    /// Reads the durable mirror; missing, unreadable or unparsable means empty.
    async fn on_load(ctx: &CartContext) -> Self {
        match ctx.storage.get(&ctx.key).await {
            Ok(Some(raw)) => match mirror::decode(&raw) {
                Ok(cart) => {
                    info!(key = %ctx.key, items = cart.len(), "Cart restored");
                    cart
                }
                Err(e) => {
                    warn!(key = %ctx.key, error = %e, "Discarding unparsable cart mirror");
                    Cart::new()
                }
            },
            Ok(None) => {
                debug!(key = %ctx.key, "No cart mirror, starting empty");
                Cart::new()
            }
            Err(e) => {
                error!(key = %ctx.key, error = %e, "Error loading cart");
                Cart::new()
            }
        }
    }

    /// Applies the action to the cart.
    ///
    /// # Actions
    /// - `Add`: merge or append; rejects a zero quantity
    /// - `SetQuantity`: absolute set, zero removes, unknown id is unchanged
    /// - `Remove`: unknown id is unchanged
    /// - `Clear`: always written, even when already empty
    /// - `Settle`: subtracts ordered lines; unchanged when none match
    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &CartContext,
    ) -> Result<Outcome<Cart>, CartError> {
        let changed = match action {
            CartAction::Add { product, quantity } => {
                if quantity == 0 {
                    return Err(CartError::InvalidQuantity(quantity));
                }
                self.add(product, quantity);
                true
            }
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(&product_id, quantity),
            CartAction::Remove(product_id) => self.remove(&product_id),
            CartAction::Clear => {
                self.clear();
                true
            }
            CartAction::Settle(ordered) => self.settle(&ordered),
        };

        let snapshot = self.clone();
        Ok(if changed {
            Outcome::changed(snapshot)
        } else {
            Outcome::unchanged(snapshot)
        })
    }

    /// Writes the whole cart under the context key.
    async fn on_persist(&self, ctx: &CartContext) -> Result<(), CartError> {
        let raw = mirror::encode(self).map_err(|e| CartError::Serialization(e.to_string()))?;
        ctx.storage.set(&ctx.key, raw).await.map_err(|e| {
            error!(key = %ctx.key, error = %e, "Error saving cart");
            CartError::Storage(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::storage::MemoryStore;

    fn context(store: &Arc<MemoryStore>) -> CartContext {
        CartContext::new(store.clone(), "cart")
    }

    #[tokio::test]
    async fn test_load_missing_and_unparsable() {
        let store = Arc::new(MemoryStore::new());
        assert!(Cart::on_load(&context(&store)).await.is_empty());

        store.set("cart", "not json".to_string()).await.unwrap();
        assert!(Cart::on_load(&context(&store)).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_read_failure_is_empty() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = Cart::new();
        cart.add(Product::new("a", "Rum", "destilados", 40.0), 1);
        cart.on_persist(&context(&store)).await.unwrap();

        store.set_fail_reads(true);
        assert!(Cart::on_load(&context(&store)).await.is_empty());

        store.set_fail_reads(false);
        assert_eq!(Cart::on_load(&context(&store)).await, cart);
    }

    #[tokio::test]
    async fn test_add_zero_rejected() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = Cart::new();
        let action = CartAction::Add {
            product: Product::new("a", "Rum", "destilados", 40.0),
            quantity: 0,
        };

        let err = cart.handle_action(action, &context(&store)).await.unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity(0));
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_change_reporting() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(&store);
        let mut cart = Cart::new();

        let outcome = cart.handle_action(CartAction::Remove("x".into()), &ctx).await.unwrap();
        assert!(!outcome.changed);

        let outcome = cart
            .handle_action(
                CartAction::SetQuantity {
                    product_id: "x".into(),
                    quantity: 3,
                },
                &ctx,
            )
            .await
            .unwrap();
        assert!(!outcome.changed);

        let outcome = cart.handle_action(CartAction::Clear, &ctx).await.unwrap();
        assert!(outcome.changed);
    }

    #[tokio::test]
    async fn test_persist_failure_is_storage_error() {
        let store = Arc::new(MemoryStore::new());
        store.set_fail_writes(true);

        let err = Cart::new().on_persist(&context(&store)).await.unwrap_err();
        assert!(matches!(err, CartError::Storage(_)));
    }
}
