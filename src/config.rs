//! Process configuration, read once from the environment at startup.

use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;
use tracing::info;

use crate::counter::{Namespace, NamespaceError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    Namespace(#[from] NamespaceError),
}

/// Which key-value backend holds the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Redis,
    Memory,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(BackendKind::Redis),
            "memory" => Ok(BackendKind::Memory),
            other => Err(format!("expected redis or memory, got {other}")),
        }
    }
}

/// Characters left as-is in the URL userinfo; everything else is encoded.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisConfig {
    pub addr: String,
    pub password: Option<String>,
    pub scheme: String,
    pub db: u32,
}

impl RedisConfig {
    /// Connection URL, e.g. `redis://:secret@localhost:6379/0`. The password
    /// is percent-encoded.
    pub fn url(&self) -> String {
        match &self.password {
            Some(password) => format!(
                "{}://:{}@{}/{}",
                self.scheme,
                utf8_percent_encode(password, USERINFO),
                self.addr,
                self.db
            ),
            None => format!("{}://{}/{}", self.scheme, self.addr, self.db),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub backend: BackendKind,
    pub redis: RedisConfig,
    pub namespace: Namespace,
    pub error_reporting_dsn: Option<String>,
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from any variable lookup. Missing variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let scheme: String = try_load(&lookup, "REDIS_SCHEME", "redis")?;
        if scheme != "redis" && scheme != "rediss" {
            return Err(ConfigError::Invalid {
                key: "REDIS_SCHEME",
                value: scheme,
                reason: "expected redis or rediss".into(),
            });
        }

        let prefix: String = try_load(&lookup, "KEY_PREFIX", "win-loss")?;
        let environment: String = try_load(&lookup, "DEPLOY_ENV", "development")?;

        Ok(Self {
            listen_addr: try_load(&lookup, "LISTEN_ADDR", "0.0.0.0:3000")?,
            backend: try_load(&lookup, "COUNTER_BACKEND", "redis")?,
            redis: RedisConfig {
                addr: try_load(&lookup, "REDIS_ADDR", "localhost:6379")?,
                password: optional(&lookup, "REDIS_PASSWORD"),
                scheme,
                db: try_load(&lookup, "REDIS_DB", "0")?,
            },
            namespace: Namespace::new(&prefix, &environment)?,
            error_reporting_dsn: optional(&lookup, "ERROR_REPORTING_DSN"),
        })
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let value = optional(lookup, key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
