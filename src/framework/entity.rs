//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a piece of state must satisfy to be owned
//! by a [`ResourceActor`](crate::framework::ResourceActor). The actor owns exactly one
//! value of the entity, restores it with [`ActorEntity::on_load`], mutates it through
//! [`ActorEntity::handle_action`] and mirrors it with [`ActorEntity::on_persist`] after
//! every action that changed it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_load`] defaults to `Self::default()`.
//! - [`ActorEntity::on_persist`] defaults to doing nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::Debug;

/// Result of a handled action: the value returned to the caller, and whether
/// the entity changed and therefore has to be persisted.
#[derive(Debug)]
pub struct Outcome<R> {
    pub result: R,
    pub changed: bool,
}

impl<R> Outcome<R> {
    pub fn changed(result: R) -> Self {
        Self {
            result,
            changed: true,
        }
    }

    pub fn unchanged(result: R) -> Self {
        Self {
            result,
            changed: false,
        }
    }
}

/// Trait that any state must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can perform I/O (reading or writing a
/// durable mirror). The `Context` type is injected into every hook at `run()` time,
/// which keeps storage backends out of the entity value itself.
#[async_trait]
pub trait ActorEntity: Clone + Default + Send + Sync + 'static {
    /// Enum of the operations the entity supports (e.g., `Add`, `Remove`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum covers every action; callers match on a single error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Restore the entity from wherever it is mirrored.
    ///
    /// Called once when the actor starts and again on every `Load` request.
    /// This hook cannot fail: an entity that cannot be restored starts from its default.
    async fn on_load(_ctx: &Self::Context) -> Self {
        Self::default()
    }

    /// Handle an action against the current state.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Outcome<Self::ActionResult>, Self::Error>;

    /// Write the current state to its mirror.
    ///
    /// Called after every action whose [`Outcome`] reports a change, in the order
    /// the actions were handled.
    async fn on_persist(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
