//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns one entity value and
//! processes requests against it sequentially.

use crate::framework::client::ResourceClient;
use crate::framework::durability::{Applied, Durability, Persistence};
use crate::framework::entity::{ActorEntity, Outcome};
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single entity.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the receiver
/// end of the channel. Requests are handled one at a time, so the state needs no
/// `Mutex`: the actor task has exclusive ownership of it.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (e.g. a storage backend) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// # Operations
///
/// * **Start**: the state is restored with `on_load` before the first request is read.
/// * **Get**: returns a clone of the state.
/// * **Load**: restores the state again with `on_load`, replacing it wholesale.
/// * **Action**:
///     1. Calls `handle_action` with the action.
///     2. Replies with the result and a durability handle.
///     3. If the outcome reports a change, calls `on_persist` and resolves the handle
///        with [`Persistence::Saved`] or [`Persistence::Failed`].
///
/// The reply is sent before the write so callers are not held up by storage. Writes
/// still happen in request order because the loop does not read the next request
/// until the current write has finished.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    state: T,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space. Must be non-zero.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: T::default(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Cart" instead of "storefront_cart::model::cart::Cart")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        self.state = T::on_load(&context).await;
        debug!(entity_type, "Initial state loaded");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { respond_to } => {
                    debug!(entity_type, "Get");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                ResourceRequest::Load { respond_to } => {
                    debug!(entity_type, "Load");
                    self.state = T::on_load(&context).await;
                    info!(entity_type, "Reloaded");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                ResourceRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    match self.state.handle_action(action, &context).await {
                        Ok(Outcome {
                            result,
                            changed: true,
                        }) => {
                            let (durability, done) = Durability::pending();
                            info!(entity_type, "Action ok");
                            let _ = respond_to.send(Ok(Applied::new(result, durability)));

                            let persistence = match self.state.on_persist(&context).await {
                                Ok(()) => {
                                    debug!(entity_type, "Persisted");
                                    Persistence::Saved
                                }
                                Err(e) => {
                                    warn!(entity_type, error = %e, "Persist failed");
                                    Persistence::Failed
                                }
                            };
                            let _ = done.send(persistence);
                        }
                        Ok(Outcome {
                            result,
                            changed: false,
                        }) => {
                            debug!(entity_type, "Action left state unchanged");
                            let _ = respond_to.send(Ok(Applied::new(result, Durability::skipped())));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, "Shutdown");
    }
}
