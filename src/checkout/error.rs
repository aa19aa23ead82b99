use thiserror::Error;

use super::launcher::LaunchError;
use crate::cart_actor::CartError;

/// Errors that stop an order from being handed off.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required delivery field is blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// There is nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// The messaging link could not be opened; the cart was left as it was.
    #[error("Could not open messaging link: {0}")]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Cart(#[from] CartError),
}
