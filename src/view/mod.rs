//! Presentation - view-models for the HTML pages and the numeric-widget payload.

mod html;
mod numerics;

use serde::Serialize;
use tracing::debug;

use crate::counter::Counter;

pub use html::{render_counter, render_index, RenderError};
pub use numerics::{default_color, postfix, NumericValue, WidgetResponse};

/// Data handed to the counter detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterPage {
    pub name: String,
    pub title: String,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub pretty_name: String,
}

impl CounterPage {
    pub fn from_counter(counter: &Counter) -> Self {
        debug!(
            counter = counter.name(),
            pretty_name = counter.pretty_name(),
            wins = counter.wins(),
            losses = counter.losses(),
            draws = counter.draws(),
            "creating counter page"
        );
        Self {
            name: counter.name().to_string(),
            title: counter.pretty_name().to_string(),
            wins: counter.wins(),
            losses: counter.losses(),
            draws: counter.draws(),
            pretty_name: counter.pretty_name().to_string(),
        }
    }
}

/// An anchor on a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// Data handed to the index page: one link per counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    pub title: String,
    pub counters: Vec<Link>,
}

impl IndexPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            counters: Vec::new(),
        }
    }

    pub fn add_counter(&mut self, href: impl Into<String>, text: impl Into<String>) {
        self.counters.push(Link {
            href: href.into(),
            text: text.into(),
        });
    }

    /// Index linking each name to its detail page, labelled with the display name.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut page = Self::new("Win/Loss Counters");
        for name in names {
            let counter = Counter::new(name.as_ref());
            page.add_counter(
                format!("/counters/{}", counter.name()),
                counter.pretty_name(),
            );
        }
        page
    }
}
