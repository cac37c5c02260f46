//! HTML rendering for the index and counter pages.
//!
//! Pages are small enough to be written straight into a `String`. Every
//! interpolated value goes through [`Escaped`].

use std::fmt::{self, Write};

use thiserror::Error;

use super::{CounterPage, IndexPage};

#[derive(Debug, Error)]
#[error("failed to render {page} page")]
pub struct RenderError {
    page: &'static str,
    #[source]
    source: fmt::Error,
}

impl RenderError {
    pub(crate) fn new(page: &'static str, source: fmt::Error) -> Self {
        Self { page, source }
    }
}

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
.board{display:flex;gap:2rem}\
.tally{text-align:center}\
.tally .value{font-size:4rem;font-weight:bold}\
.win .value{color:green}.loss .value{color:red}.draw .value{color:gray}";

/// Escapes `& < > " '` when displayed.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

fn open(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", Escaped(title))?;
    writeln!(out, "<style>{STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")
}

fn close(out: &mut String) -> fmt::Result {
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

pub fn render_index(page: &IndexPage) -> Result<String, RenderError> {
    let mut out = String::new();
    write_index(&mut out, page).map_err(|source| RenderError::new("index", source))?;
    Ok(out)
}

fn write_index(out: &mut String, page: &IndexPage) -> fmt::Result {
    open(out, &page.title)?;
    writeln!(out, "<h1>{}</h1>", Escaped(&page.title))?;
    if page.counters.is_empty() {
        writeln!(out, "<p>No counters yet.</p>")?;
    } else {
        writeln!(out, "<ul>")?;
        for link in &page.counters {
            writeln!(
                out,
                "<li><a href=\"{}\">{}</a></li>",
                Escaped(&link.href),
                Escaped(&link.text)
            )?;
        }
        writeln!(out, "</ul>")?;
    }
    close(out)
}

/// Render a counter page. `solo` renders the scoreboard alone, for embedding.
pub fn render_counter(page: &CounterPage, solo: bool) -> Result<String, RenderError> {
    let mut out = String::new();
    let name = if solo { "solo counter" } else { "counter" };
    write_counter(&mut out, page, solo).map_err(|source| RenderError::new(name, source))?;
    Ok(out)
}

fn write_counter(out: &mut String, page: &CounterPage, solo: bool) -> fmt::Result {
    open(out, &page.title)?;
    if !solo {
        writeln!(out, "<nav><a href=\"/\">All counters</a></nav>")?;
        writeln!(out, "<h1>{}</h1>", Escaped(&page.pretty_name))?;
    }
    writeln!(
        out,
        "<div class=\"board\" data-counter=\"{}\">",
        Escaped(&page.name)
    )?;
    for (class, label, value) in [
        ("win", "Wins", page.wins),
        ("loss", "Losses", page.losses),
        ("draw", "Draws", page.draws),
    ] {
        writeln!(
            out,
            "<div class=\"tally {class}\"><div class=\"value\">{value}</div>\
             <div class=\"label\">{label}</div></div>"
        )?;
    }
    writeln!(out, "</div>")?;
    close(out)
}
