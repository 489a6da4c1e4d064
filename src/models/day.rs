//! Day-of-week model.
//!
//! The timetable covers one fixed week. Days are ordered by their position
//! in [`Day::ALL`] (Monday first) and index the columns of every grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::EntryError;

/// A column of the weekly timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    /// Monday (월).
    Mon,
    /// Tuesday (화).
    Tue,
    /// Wednesday (수).
    Wed,
    /// Thursday (목).
    Thu,
    /// Friday (금).
    Fri,
    /// Saturday (토).
    Sat,
    /// Sunday (일).
    Sun,
}

impl Day {
    /// All days in column order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Number of day columns.
    pub const COUNT: usize = 7;

    /// Column index (0 = Monday).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at a column index, if in range.
    pub fn from_index(index: usize) -> Option<Day> {
        Self::ALL.get(index).copied()
    }

    /// Short English label ("Mon", "Tue", ...).
    pub fn label(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    /// Full English name ("Monday", ...).
    pub fn full_name(self) -> &'static str {
        match self {
            Day::Mon => "Monday",
            Day::Tue => "Tuesday",
            Day::Wed => "Wednesday",
            Day::Thu => "Thursday",
            Day::Fri => "Friday",
            Day::Sat => "Saturday",
            Day::Sun => "Sunday",
        }
    }

    /// Single-character Korean label used by course registration forms.
    pub fn korean_label(self) -> &'static str {
        match self {
            Day::Mon => "월",
            Day::Tue => "화",
            Day::Wed => "수",
            Day::Thu => "목",
            Day::Fri => "금",
            Day::Sat => "토",
            Day::Sun => "일",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = EntryError;

    /// Accepts English short or full names (any case) and Korean labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        Day::ALL
            .iter()
            .copied()
            .find(|d| {
                lower == d.label().to_ascii_lowercase()
                    || lower == d.full_name().to_ascii_lowercase()
                    || trimmed == d.korean_label()
                    || trimmed == format!("{}요일", d.korean_label())
            })
            .ok_or_else(|| EntryError::UnknownDay(s.to_string()))
    }
}
