//! # Durability Handles
//!
//! A mutating request is answered as soon as the in-memory state has changed.
//! The write to the durable mirror happens afterwards, inside the actor. The
//! [`Durability`] handle returned with the answer lets the caller decide
//! whether to wait for that write.

use tokio::sync::oneshot;

/// What happened to the durable mirror after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// The new state was written.
    Saved,
    /// The write failed; the in-memory state is still authoritative.
    Failed,
    /// The action changed nothing, so nothing was written.
    Skipped,
}

#[derive(Debug)]
enum Inner {
    Ready(Persistence),
    Pending(oneshot::Receiver<Persistence>),
}

/// Resolves once the actor has finished (or given up) persisting an action.
#[derive(Debug)]
pub struct Durability {
    inner: Inner,
}

impl Durability {
    /// A handle that is already resolved.
    pub fn ready(persistence: Persistence) -> Self {
        Self {
            inner: Inner::Ready(persistence),
        }
    }

    pub fn skipped() -> Self {
        Self::ready(Persistence::Skipped)
    }

    /// A handle resolved through the returned sender.
    pub(crate) fn pending() -> (Self, oneshot::Sender<Persistence>) {
        let (done, receiver) = oneshot::channel();
        (
            Self {
                inner: Inner::Pending(receiver),
            },
            done,
        )
    }

    /// Wait for the write to finish.
    ///
    /// If the actor stops before reporting, the write is considered failed.
    pub async fn wait(self) -> Persistence {
        match self.inner {
            Inner::Ready(persistence) => persistence,
            Inner::Pending(receiver) => receiver.await.unwrap_or(Persistence::Failed),
        }
    }
}

/// The answer to an action: its result plus the durability of the change.
#[derive(Debug)]
pub struct Applied<R> {
    pub result: R,
    pub durability: Durability,
}

impl<R> Applied<R> {
    pub fn new(result: R, durability: Durability) -> Self {
        Self { result, durability }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ready_handle_resolves_immediately() {
        assert_eq!(Durability::skipped().wait().await, Persistence::Skipped);
        assert_eq!(
            Durability::ready(Persistence::Saved).wait().await,
            Persistence::Saved
        );
    }

    #[tokio::test]
    async fn test_pending_handle_resolves_from_sender() {
        let (durability, done) = Durability::pending();
        done.send(Persistence::Saved).unwrap();
        assert_eq!(durability.wait().await, Persistence::Saved);
    }

    #[tokio::test]
    async fn test_dropped_sender_counts_as_failure() {
        let (durability, done) = Durability::pending();
        drop(done);
        assert_eq!(durability.wait().await, Persistence::Failed);
    }
}
