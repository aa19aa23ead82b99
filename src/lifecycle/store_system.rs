use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::cart_actor::{self, CartContext};
use crate::checkout::{CheckoutService, MessageLauncher};
use crate::clients::CartClient;
use crate::config::StoreConfig;
use crate::storage::{FileStore, KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Cart actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Runs the cart actor and hands out the clients that talk to it.
///
/// The actor restores the saved cart before it serves its first request, so
/// any call made through [`StoreSystem::cart_client`] already sees the
/// persisted state.
pub struct StoreSystem {
    /// Client for the cart actor.
    pub cart_client: CartClient,

    handle: JoinHandle<()>,
}

impl StoreSystem {
    /// Starts the cart actor over `storage`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(storage: Arc<dyn KeyValueStore>, config: &StoreConfig) -> Self {
        let (actor, client) = cart_actor::new(config.channel_capacity);
        let context = CartContext::new(storage, config.storage_key.clone());
        let handle = tokio::spawn(actor.run(context));

        info!(key = %config.storage_key, "Store system started");
        Self {
            cart_client: CartClient::new(client),
            handle,
        }
    }

    /// Starts the cart actor over a [`FileStore`] in `config.storage_dir`.
    pub async fn open(config: &StoreConfig) -> Result<Self, StorageError> {
        let store = FileStore::open(&config.storage_dir).await?;
        Ok(Self::start(Arc::new(store), config))
    }

    /// A checkout service bound to this system's cart.
    pub fn checkout(&self, launcher: Arc<dyn MessageLauncher>, config: &StoreConfig) -> CheckoutService {
        CheckoutService::new(self.cart_client.clone(), launcher, config)
    }

    /// Drops the client and waits for the actor to drain its queue.
    ///
    /// Writes already queued by the actor finish before this returns. Clones of
    /// the client held elsewhere keep the actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down store system...");
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Cart actor task failed");
            return Err(e.into());
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}
