//! Payload for the Numerics dashboard widget: one integer plus a label and color.

use serde::Serialize;

use crate::counter::{Counter, Field};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumericValue {
    pub value: i64,
}

/// `{"postfix": "Wins", "color": "green", "data": {"value": 5}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetResponse {
    pub postfix: String,
    pub color: String,
    pub data: NumericValue,
}

impl WidgetResponse {
    /// Widget for one field of `counter`. An absent or empty `color` falls back
    /// to the field's default.
    pub fn for_field(counter: &Counter, field: Field, color: Option<&str>) -> Self {
        let color = color
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default_color(field));
        Self {
            postfix: postfix(field).to_string(),
            color: color.to_string(),
            data: NumericValue {
                value: counter.get(field),
            },
        }
    }
}

pub fn postfix(field: Field) -> &'static str {
    match field {
        Field::Win => "Wins",
        Field::Loss => "Losses",
        Field::Draw => "Draws",
    }
}

pub fn default_color(field: Field) -> &'static str {
    match field {
        Field::Win => "green",
        Field::Loss => "red",
        Field::Draw => "gray",
    }
}
