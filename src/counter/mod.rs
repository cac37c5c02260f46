//! Counters - named win/loss/draw tallies.
//!
//! A `Counter` is built fresh for every request, hydrated from the backend by
//! a [`CounterStore`], changed by at most one [`Mutation`] and saved back.
//!
//! ## Example
//!
//! ```ignore
//! use winloss::{CounterStore, InMemoryKv, Namespace};
//!
//! let store = CounterStore::new(InMemoryKv::new(), &Namespace::new("win-loss", "dev")?);
//! let mut counter = store.create("team-a");
//! store.load(&mut counter).await?;
//! store.add_win(&mut counter).await?;
//! assert_eq!(counter.wins(), 1);
//! ```

mod namespace;
mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use namespace::{InvalidName, Namespace, NamespaceError};
pub use store::{CounterStore, Loaded, StoreError};

/// A named win/loss/draw record.
///
/// Fields are private: a value only leaves the crate after the store has
/// validated it, so callers never see a negative count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counter {
    name: String,
    pretty_name: String,
    wins: i64,
    losses: i64,
    draws: i64,
}

/// The part of a stored record that is trusted on load.
///
/// Missing fields count as zero. `name` and `pretty_name` are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StoredCounts {
    wins: i64,
    losses: i64,
    draws: i64,
}

impl Counter {
    /// A zero-valued counter. Does not touch storage.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            pretty_name: pretty_name(&name),
            name,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name: the name with hyphens replaced by spaces.
    pub fn pretty_name(&self) -> &str {
        &self.pretty_name
    }

    pub fn wins(&self) -> i64 {
        self.wins
    }

    pub fn losses(&self) -> i64 {
        self.losses
    }

    pub fn draws(&self) -> i64 {
        self.draws
    }

    /// The count for one field.
    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::Win => self.wins,
            Field::Loss => self.losses,
            Field::Draw => self.draws,
        }
    }

    /// The empty name marks a helper used only for listing; it is never persisted.
    pub fn is_helper(&self) -> bool {
        self.name.is_empty()
    }

    /// Clamp every negative count to zero.
    pub fn validate(&mut self) {
        self.wins = self.wins.max(0);
        self.losses = self.losses.max(0);
        self.draws = self.draws.max(0);
    }

    /// Apply a mutation in memory. Can leave a count at -1 until the next `validate`.
    pub(crate) fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::Add(field) => {
                let slot = self.slot(field);
                *slot = slot.saturating_add(1);
            }
            Mutation::Remove(field) => {
                let slot = self.slot(field);
                *slot = slot.saturating_sub(1);
            }
            Mutation::Reset => {
                self.wins = 0;
                self.losses = 0;
                self.draws = 0;
            }
        }
    }

    pub(crate) fn hydrate(&mut self, counts: StoredCounts) {
        self.wins = counts.wins;
        self.losses = counts.losses;
        self.draws = counts.draws;
        self.validate();
    }

    fn slot(&mut self, field: Field) -> &mut i64 {
        match field {
            Field::Win => &mut self.wins,
            Field::Loss => &mut self.losses,
            Field::Draw => &mut self.draws,
        }
    }
}

fn pretty_name(name: &str) -> String {
    name.replace('-', " ")
}

/// One of the three tallies of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Win,
    Loss,
    Draw,
}

impl Field {
    /// Path segment naming this field (`win`, `loss`, `draw`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Win => "win",
            Field::Loss => "loss",
            Field::Draw => "draw",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a path segment that is not `win`, `loss` or `draw`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown counter field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Field::Win),
            "loss" => Ok(Field::Loss),
            "draw" => Ok(Field::Draw),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// A single state change applied to a counter before saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add(Field),
    Remove(Field),
    Reset,
}
