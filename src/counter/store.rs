//! CounterStore - load/mutate/save of counters against a key-value backend.
//!
//! Every mutation is a read-modify-write across two backend round trips with
//! no version check in between. Two requests changing the same counter at
//! once both read the old value and the last `put` wins, so one change is lost.

use thiserror::Error;
use tracing::debug;

use super::{Counter, Field, Mutation, Namespace, StoredCounts};
use crate::kv::{KvBackend, KvError};

/// Error type for counter store operations.
///
/// The store reports every failure; deciding whether a failure should reach
/// the client is left to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] KvError),
    /// The stored value is not a counter. The record was left unchanged.
    #[error("malformed counter at {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode counter: {0}")]
    Encode(#[source] serde_json::Error),
}

/// What `load` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loaded {
    /// Helper counter with an empty name, nothing was read.
    Helper,
    /// No stored value, the counter keeps its defaults.
    Missing,
    /// Counts were read from storage.
    Found,
}

/// Owns the mapping between counter names and their stored records.
#[derive(Clone)]
pub struct CounterStore<B> {
    backend: B,
    namespace: Namespace,
}

impl<B: KvBackend> CounterStore<B> {
    pub fn new(backend: B, namespace: &Namespace) -> Self {
        Self {
            backend,
            namespace: namespace.clone(),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// A zero-valued counter. Does not touch storage.
    pub fn create(&self, name: &str) -> Counter {
        Counter::new(name)
    }

    /// Hydrate `counter` from its stored record, if there is one.
    ///
    /// Only wins/losses/draws are read back, then clamped to zero. On any
    /// error the counter keeps the values it had before the call.
    pub async fn load(&self, counter: &mut Counter) -> Result<Loaded, StoreError> {
        if counter.is_helper() {
            return Ok(Loaded::Helper);
        }

        let key = self.namespace.key(counter.name());
        let Some(raw) = self.backend.get(&key).await? else {
            debug!(counter = counter.name(), "counter does not exist yet");
            return Ok(Loaded::Missing);
        };

        let counts: StoredCounts =
            serde_json::from_str(&raw).map_err(|source| StoreError::Decode { key, source })?;
        counter.hydrate(counts);
        Ok(Loaded::Found)
    }

    /// Validate and write the full record, overwriting whatever is stored.
    ///
    /// The counter is clamped even when the write fails.
    pub async fn save(&self, counter: &mut Counter) -> Result<(), StoreError> {
        counter.validate();
        if counter.is_helper() {
            return Ok(());
        }

        let value = serde_json::to_string(counter).map_err(StoreError::Encode)?;
        self.backend
            .put(&self.namespace.key(counter.name()), value)
            .await?;
        debug!(
            counter = counter.name(),
            wins = counter.wins(),
            losses = counter.losses(),
            draws = counter.draws(),
            "saved counter"
        );
        Ok(())
    }

    /// Names of every counter in the namespace, in backend order.
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        let keys = self
            .backend
            .list_keys(self.namespace.counters_prefix())
            .await?;
        Ok(keys
            .iter()
            .filter_map(|key| self.namespace.name_from_key(key))
            .map(str::to_string)
            .collect())
    }

    /// Remove the stored record. A counter that was never saved is not an error.
    pub async fn delete(&self, counter: &Counter) -> Result<(), StoreError> {
        if counter.is_helper() {
            return Ok(());
        }
        self.backend
            .delete(&self.namespace.key(counter.name()))
            .await?;
        debug!(counter = counter.name(), "deleted counter");
        Ok(())
    }

    /// Apply `mutation` in memory and save straight away.
    pub async fn apply(&self, counter: &mut Counter, mutation: Mutation) -> Result<(), StoreError> {
        counter.apply(mutation);
        self.save(counter).await
    }

    pub async fn add_win(&self, counter: &mut Counter) -> Result<(), StoreError> {
        self.apply(counter, Mutation::Add(Field::Win)).await
    }

    pub async fn remove_win(&self, counter: &mut Counter) -> Result<(), StoreError> {
        self.apply(counter, Mutation::Remove(Field::Win)).await
    }

    pub async fn add_loss(&self, counter: &mut Counter) -> Result<(), StoreError> {
        self.apply(counter, Mutation::Add(Field::Loss)).await
    }

    pub async fn remove_loss(&self, counter: &mut Counter) -> Result<(), StoreError> {
        self.apply(counter, Mutation::Remove(Field::Loss)).await
    }

    pub async fn add_draw(&self, counter: &mut Counter) -> Result<(), StoreError> {
        self.apply(counter, Mutation::Add(Field::Draw)).await
    }

    pub async fn remove_draw(&self, counter: &mut Counter) -> Result<(), StoreError> {
        self.apply(counter, Mutation::Remove(Field::Draw)).await
    }

    pub async fn reset(&self, counter: &mut Counter) -> Result<(), StoreError> {
        self.apply(counter, Mutation::Reset).await
    }
}
