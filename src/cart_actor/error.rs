//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The quantity given to an add is not positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The cart could not be encoded for its durable mirror.
    #[error("Cart serialization error: {0}")]
    Serialization(String),

    /// The durable mirror could not be written.
    #[error("Cart storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
