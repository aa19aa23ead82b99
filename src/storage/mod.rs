//! On-device key-value storage and the cart's durable mirror.
//!
//! - [`KeyValueStore`] - string-keyed, string-valued async storage
//! - [`MemoryStore`] - in-memory backend for tests and embedding
//! - [`FileStore`] - one file per key under a root directory
//! - [`mirror`] - encoding of the cart stored under the cart key

pub mod error;
pub mod file;
pub mod memory;
pub mod mirror;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Asynchronous key-value storage.
///
/// Implementations must satisfy these invariants:
/// - `get` after `set` on the same key returns the value that was set.
/// - `get` on a key that was never set, or was removed, returns `Ok(None)`.
/// - `remove` on a missing key is not an error.
/// - I/O errors are returned to the caller; deciding whether they matter is the caller's job.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;

    /// Delete `key`.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
