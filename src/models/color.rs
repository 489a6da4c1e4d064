//! Course colour palette.
//!
//! Every course is drawn in one of ten fixed colours. The palette order is
//! part of the contract: colour assignment reduces a hash modulo
//! [`Color::PALETTE`]'s length and indexes into it.
//!
//! Conflict cells never use a palette colour; renderers paint them with
//! [`CONFLICT_HEX`] regardless of which courses collide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fill colour for any cell occupied by two or more courses.
pub const CONFLICT_HEX: &str = "#D32F2F";

/// One of the ten palette colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// `#F94144`
    Red,
    /// `#F3722C`
    Orange,
    /// `#F8961E`
    Amber,
    /// `#F9C74F`
    Maize,
    /// `#90BE6D`
    Pistachio,
    /// `#43AA8B`
    Jade,
    /// `#4D908E`
    Teal,
    /// `#577590`
    Slate,
    /// `#277DA1`
    Cerulean,
    /// `#003049`
    Navy,
}

impl Color {
    /// The palette, in assignment order.
    pub const PALETTE: [Color; 10] = [
        Color::Red,
        Color::Orange,
        Color::Amber,
        Color::Maize,
        Color::Pistachio,
        Color::Jade,
        Color::Teal,
        Color::Slate,
        Color::Cerulean,
        Color::Navy,
    ];

    /// Position in [`Color::PALETTE`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Palette colour at `index mod 10`.
    pub fn from_palette_index(index: usize) -> Color {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// CSS hex value, e.g. `"#F94144"`.
    pub fn hex(self) -> &'static str {
        match self {
            Color::Red => "#F94144",
            Color::Orange => "#F3722C",
            Color::Amber => "#F8961E",
            Color::Maize => "#F9C74F",
            Color::Pistachio => "#90BE6D",
            Color::Jade => "#43AA8B",
            Color::Teal => "#4D908E",
            Color::Slate => "#577590",
            Color::Cerulean => "#277DA1",
            Color::Navy => "#003049",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}
