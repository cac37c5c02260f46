use thiserror::Error;
use tracing::info;

use crate::config::{BackendKind, Config};
use crate::counter::CounterStore;
use crate::http;
use crate::kv::{InMemoryKv, KvError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not open backend: {0}")]
    Backend(#[from] KvError),
    #[error("redis backend requested but the `redis` feature is disabled")]
    RedisDisabled,
}

/// Open the configured backend and serve until shutdown.
pub async fn run(config: &Config) -> Result<(), RunError> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = config.namespace.environment(),
        prefix = config.namespace.prefix(),
        backend = ?config.backend,
        error_reporting = config.error_reporting_dsn.is_some(),
        "Starting winloss"
    );

    match config.backend {
        BackendKind::Memory => {
            let store = CounterStore::new(InMemoryKv::new(), &config.namespace);
            http::serve(store, config.listen_addr).await?;
        }
        BackendKind::Redis => serve_redis(config).await?,
    }
    Ok(())
}

#[cfg(feature = "redis")]
async fn serve_redis(config: &Config) -> Result<(), RunError> {
    info!(addr = %config.redis.addr, "Connecting to redis");
    let kv = crate::kv::RedisKv::connect(&config.redis.url()).await?;
    let store = CounterStore::new(kv, &config.namespace);
    http::serve(store, config.listen_addr).await?;
    Ok(())
}

#[cfg(not(feature = "redis"))]
async fn serve_redis(_config: &Config) -> Result<(), RunError> {
    Err(RunError::RedisDisabled)
}
