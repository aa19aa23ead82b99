//! Generic actor framework for owned, persisted state.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that a piece of state implements to be owned by an actor
//! - [`ResourceActor`] - Generic actor that owns the state and processes requests
//! - [`ResourceClient`] - Cloneable, type-safe handle for talking to the actor
//! - [`Durability`] - Handle for awaiting the write that follows a mutation
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod durability;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use durability::{Applied, Durability, Persistence};
pub use entity::{ActorEntity, Outcome};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
