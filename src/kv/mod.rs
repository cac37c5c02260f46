//! Key-value backends - the storage contract the counter store is written against.
//!
//! The store only needs four string-keyed operations, so any backend that can
//! get, put, delete and enumerate keys by prefix can hold counters.
//!
//! ## Example
//!
//! ```ignore
//! use winloss::{InMemoryKv, KvBackend};
//!
//! let kv = InMemoryKv::new();
//! kv.put("win-loss/dev/counters/team-a", "{}".into()).await?;
//! let keys = kv.list_keys("win-loss/dev/counters/").await?;
//! ```

mod in_memory;
#[cfg(feature = "redis")]
mod redis_kv;

use std::future::Future;

use thiserror::Error;

/// Error type for backend operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KvError {
    /// The backend could not be reached or refused the command.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    /// The backend answered, but the operation failed.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Abstract string storage for serialized records.
///
/// Writes are unconditional overwrites. There is no versioning or
/// compare-and-swap, so concurrent writers to one key are last-write-wins.
pub trait KvBackend: Send + Sync + 'static {
    /// Get the raw value at `key`. Returns None if the key is absent.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, KvError>> + Send;

    /// Store `value` at `key`, replacing anything already there.
    fn put(&self, key: &str, value: String) -> impl Future<Output = Result<(), KvError>> + Send;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), KvError>> + Send;

    /// List every stored key starting with `prefix`, in backend order.
    fn list_keys(&self, prefix: &str)
        -> impl Future<Output = Result<Vec<String>, KvError>> + Send;
}

pub use in_memory::InMemoryKv;
#[cfg(feature = "redis")]
pub use redis_kv::RedisKv;
