//! RedisKv - Redis-backed key-value store.
//!
//! Values are plain strings under plain keys (`GET`/`SET`/`DEL`). Listing uses
//! `KEYS <prefix>*` with the prefix glob-escaped, which is fine for the small
//! keyspace a counter deployment has.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use tracing::info;

use super::{KvBackend, KvError};

/// Redis key-value store sharing one auto-reconnecting connection.
///
/// `ConnectionManager` is a cheap handle; each call clones it.
#[derive(Clone)]
pub struct RedisKv {
    connection: ConnectionManager,
}

impl RedisKv {
    /// Open a client for `url` (e.g. `redis://:secret@localhost:6379/0`) and connect.
    pub async fn connect(url: &str) -> Result<Self, KvError> {
        let client = Client::open(url).map_err(map_err)?;
        let connection = client.get_connection_manager().await.map_err(map_err)?;
        info!("Connected to redis");
        Ok(Self { connection })
    }
}

fn map_err(err: RedisError) -> KvError {
    if err.is_io_error()
        || err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_timeout()
    {
        KvError::Unavailable(err.to_string())
    } else {
        KvError::Backend(err.to_string())
    }
}

/// Escape the glob metacharacters `KEYS` understands so a prefix matches literally.
fn glob_escape(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl KvBackend for RedisKv {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let mut con = self.connection.clone();
        con.get::<_, Option<String>>(key).await.map_err(map_err)
    }

    async fn put(&self, key: &str, value: String) -> Result<(), KvError> {
        let mut con = self.connection.clone();
        con.set::<_, _, ()>(key, value).await.map_err(map_err)
    }

    async fn delete(&self, key: &str) -> Result<(), KvError> {
        let mut con = self.connection.clone();
        con.del::<_, ()>(key).await.map_err(map_err)
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, KvError> {
        let mut con = self.connection.clone();
        let pattern = format!("{}*", glob_escape(prefix));
        con.keys::<_, Vec<String>>(pattern).await.map_err(map_err)
    }
}
