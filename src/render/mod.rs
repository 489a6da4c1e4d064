//! Reference renderers for a [`Composition`](crate::compositor::Composition).
//!
//! Renderers only read the layout model. Two are provided:
//!
//! - **`html`**: a `<table>` with `rowspan` cells for merged spans and
//!   stacked names for conflicts.
//! - **`text`**: a plain grid listing every occupant per cell, with an
//!   overlap flag.
//!
//! Both paint conflicts the same way regardless of which courses collide.

pub mod html;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::models::{Day, CONFLICT_HEX};

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Fill colour of conflict cells.
    #[serde(default = "default_conflict_color")]
    pub conflict_color: String,
    /// Whether Saturday and Sunday columns are shown.
    #[serde(default = "default_include_weekend")]
    pub include_weekend: bool,
}

fn default_conflict_color() -> String {
    CONFLICT_HEX.to_string()
}

fn default_include_weekend() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            conflict_color: default_conflict_color(),
            include_weekend: default_include_weekend(),
        }
    }
}

impl RenderConfig {
    /// Sets the conflict fill colour.
    pub fn with_conflict_color(mut self, color: impl Into<String>) -> Self {
        self.conflict_color = color.into();
        self
    }

    /// Shows or hides the weekend columns.
    pub fn with_weekend(mut self, include_weekend: bool) -> Self {
        self.include_weekend = include_weekend;
        self
    }

    /// Day columns to render, in order.
    pub fn visible_days(&self) -> Vec<Day> {
        Day::ALL
            .iter()
            .copied()
            .filter(|d| self.include_weekend || !matches!(d, Day::Sat | Day::Sun))
            .collect()
    }
}
