//! Storage key layout for one deployment environment.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("namespace {0} must not be empty")]
    Empty(&'static str),
    #[error("namespace {part} must not contain '/': {value}")]
    Separator { part: &'static str, value: String },
}

/// A counter name that would not map to a single storage key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid counter name: {0}")]
pub struct InvalidName(pub String);

/// Fixed key prefix under which one environment's counters live.
///
/// Keys have the form `<prefix>/<environment>/counters/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    prefix: String,
    environment: String,
    counters: String,
}

impl Namespace {
    pub fn new(prefix: &str, environment: &str) -> Result<Self, NamespaceError> {
        check("prefix", prefix)?;
        check("environment", environment)?;
        Ok(Self {
            prefix: prefix.to_string(),
            environment: environment.to_string(),
            counters: format!("{prefix}/{environment}/counters/"),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// The common prefix of every counter key in this namespace.
    pub fn counters_prefix(&self) -> &str {
        &self.counters
    }

    /// Reject names that `name_from_key` could never recover, so a save
    /// cannot leave a key that listing skips.
    pub fn check_name(name: &str) -> Result<(), InvalidName> {
        if name.contains('/') {
            return Err(InvalidName(name.to_string()));
        }
        Ok(())
    }

    /// Storage key for the counter called `name`.
    pub fn key(&self, name: &str) -> String {
        format!("{}{}", self.counters, name)
    }

    /// Recover a counter name from a storage key.
    ///
    /// None for keys outside the namespace, with an empty name, or with extra
    /// path segments after the name.
    pub fn name_from_key<'k>(&self, key: &'k str) -> Option<&'k str> {
        key.strip_prefix(self.counters.as_str())
            .filter(|name| !name.is_empty() && !name.contains('/'))
    }
}

fn check(part: &'static str, value: &str) -> Result<(), NamespaceError> {
    if value.is_empty() {
        return Err(NamespaceError::Empty(part));
    }
    if value.contains('/') {
        return Err(NamespaceError::Separator {
            part,
            value: value.to_string(),
        });
    }
    Ok(())
}
