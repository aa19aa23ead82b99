use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// Provides default implementations of `snapshot` and `load` on top of the
/// wrapped [`ResourceClient`], mapped into the client's own error type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get().await.map_err(Self::map_error)
    }

    /// Replace the state with the one restored from its durable mirror.
    #[tracing::instrument(skip(self))]
    async fn load(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().load().await.map_err(Self::map_error)
    }
}
