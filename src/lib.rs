//! winloss - named win/loss/draw counters over a key-value store.
//!
//! Each request builds a [`Counter`], loads it through a [`CounterStore`],
//! applies at most one [`Mutation`] and saves it back. The [`http`] module
//! serves the JSON API and the HTML pages on top.

mod app;
pub mod config;
mod counter;
pub mod http;
mod kv;
pub mod telemetry;
pub mod view;

pub use app::{run, RunError};
pub use config::{BackendKind, Config, ConfigError, RedisConfig};
pub use counter::{
    Counter, CounterStore, Field, InvalidName, Loaded, Mutation, Namespace, NamespaceError,
    StoreError, UnknownField,
};
pub use kv::{InMemoryKv, KvBackend, KvError};
#[cfg(feature = "redis")]
pub use kv::RedisKv;
