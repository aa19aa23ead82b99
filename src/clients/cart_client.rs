//! # Cart Client
//!
//! Provides the high-level API screens use to drive the cart.
//! It wraps a `ResourceClient<Cart>` and exposes one method per cart operation.
use crate::cart_actor::{CartAction, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{Applied, Durability, FrameworkError, Persistence, ResourceClient};
use crate::model::{Cart, CartItem, Product, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// The cart after a mutation, plus a handle on the write that follows it.
///
/// The cart is usable immediately. Call [`CartUpdate::persisted`] to wait until the
/// durable mirror has caught up.
#[derive(Debug)]
pub struct CartUpdate {
    pub cart: Cart,
    durability: Durability,
}

impl CartUpdate {
    /// Wait for the durable mirror to be written.
    pub async fn persisted(self) -> Persistence {
        self.durability.wait().await
    }
}

impl From<Applied<Cart>> for CartUpdate {
    fn from(applied: Applied<Cart>) -> Self {
        Self {
            cart: applied.result,
            durability: applied.durability,
        }
    }
}

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    /// Cart errors raised inside the actor come back as themselves; anything else is
    /// a communication problem.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    async fn send(&self, action: CartAction) -> Result<CartUpdate, CartError> {
        self.inner
            .perform_action(action)
            .await
            .map(CartUpdate::from)
            .map_err(Self::map_error)
    }

    /// Add `quantity` units of `product`. An existing line is incremented.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(&self, product: Product, quantity: u32) -> Result<CartUpdate, CartError> {
        debug!("Sending request");
        self.send(CartAction::Add { product, quantity }).await
    }

    /// Add a single unit of `product`.
    pub async fn add_one(&self, product: Product) -> Result<CartUpdate, CartError> {
        self.add_item(product, 1).await
    }

    /// Set the quantity of a line; `0` removes it, an unknown id changes nothing.
    #[instrument(skip(self, product_id), fields(product_id = %product_id))]
    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartUpdate, CartError> {
        debug!("Sending request");
        self.send(CartAction::SetQuantity {
            product_id,
            quantity,
        })
        .await
    }

    #[instrument(skip(self, product_id), fields(product_id = %product_id))]
    pub async fn remove_item(&self, product_id: ProductId) -> Result<CartUpdate, CartError> {
        debug!("Sending request");
        self.send(CartAction::Remove(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<CartUpdate, CartError> {
        debug!("Sending request");
        self.send(CartAction::Clear).await
    }

    /// Remove the lines of a handed-off order, leaving anything added since.
    #[instrument(skip(self, ordered), fields(lines = ordered.len()))]
    pub async fn settle(&self, ordered: Vec<CartItem>) -> Result<CartUpdate, CartError> {
        debug!("Sending request");
        self.send(CartAction::Settle(ordered)).await
    }

    /// Total price of the current cart.
    pub async fn total(&self) -> Result<f64, CartError> {
        Ok(self.snapshot().await?.total())
    }

    /// Number of units in the current cart.
    pub async fn item_count(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.item_count())
    }
}
