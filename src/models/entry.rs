//! Course entry model.
//!
//! A course entry is one weekly meeting of a course: a name, a day, and a
//! half-open slot interval `[start_slot, end_slot)` on that day. Its colour
//! is derived from the name, never chosen by the user.
//!
//! # Lifecycle
//! Entries are created from validated drafts, appended to a course list,
//! and later removed. They are never edited in place.

use serde::{Deserialize, Serialize};

use super::{Color, Day};
use crate::axis::TimeAxis;
use crate::color::ColorAssigner;
use crate::validation::{validate_draft, EntryError};

/// Unvalidated input for a course entry, as produced by an input form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// Course name as typed.
    pub name: String,
    /// Day column.
    pub day: Day,
    /// First occupied row.
    pub start_slot: usize,
    /// Row after the last occupied one (exclusive end).
    pub end_slot: usize,
}

impl EntryDraft {
    /// Creates a draft from slot indices.
    pub fn new(name: impl Into<String>, day: Day, start_slot: usize, end_slot: usize) -> Self {
        Self {
            name: name.into(),
            day,
            start_slot,
            end_slot,
        }
    }

    /// Creates a draft from the labels an input form offers.
    ///
    /// `day` accepts anything [`Day`] parses. `start_label` must be a row
    /// label; `end_label` may also be the end-of-day boundary label.
    ///
    /// # Errors
    /// `UnknownDay` or `UnknownLabel` if a label does not resolve. The
    /// interval itself is not checked here.
    pub fn from_labels(
        name: impl Into<String>,
        day: &str,
        start_label: &str,
        end_label: &str,
        axis: &TimeAxis,
    ) -> Result<Self, EntryError> {
        let day: Day = day.parse()?;
        let start_slot = axis
            .slot_for_label(start_label)
            .ok_or_else(|| EntryError::UnknownLabel(start_label.to_string()))?;
        let end_slot = axis
            .boundary_for_label(end_label)
            .ok_or_else(|| EntryError::UnknownLabel(end_label.to_string()))?;
        Ok(Self::new(name, day, start_slot, end_slot))
    }
}

/// A validated course meeting.
///
/// Invariant: `start_slot < end_slot`. Built through [`CourseEntry::from_draft`]
/// the invariant is checked; [`CourseEntry::new`] trusts the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Course name (non-empty).
    pub name: String,
    /// Day column.
    pub day: Day,
    /// First occupied row.
    pub start_slot: usize,
    /// Row after the last occupied one (exclusive end).
    pub end_slot: usize,
    /// Colour derived from `name`.
    pub color: Color,
}

impl CourseEntry {
    /// Creates an entry without validation, deriving the colour.
    pub fn new<C: ColorAssigner + ?Sized>(
        name: impl Into<String>,
        day: Day,
        start_slot: usize,
        end_slot: usize,
        colors: &C,
    ) -> Self {
        let name = name.into();
        let color = colors.color_for(&name);
        Self {
            name,
            day,
            start_slot,
            end_slot,
            color,
        }
    }

    /// Validates a draft and builds the entry.
    ///
    /// The name is stored trimmed.
    pub fn from_draft<C: ColorAssigner + ?Sized>(
        draft: &EntryDraft,
        axis: &TimeAxis,
        colors: &C,
    ) -> Result<Self, EntryError> {
        validate_draft(draft, axis)?;
        Ok(Self::new(
            draft.name.trim(),
            draft.day,
            draft.start_slot,
            draft.end_slot,
            colors,
        ))
    }

    /// Number of rows occupied.
    #[inline]
    pub fn duration_slots(&self) -> usize {
        self.end_slot.saturating_sub(self.start_slot)
    }

    /// Whether this entry occupies `slot` on `day`.
    #[inline]
    pub fn covers(&self, day: Day, slot: usize) -> bool {
        self.day == day && slot >= self.start_slot && slot < self.end_slot
    }

    /// Whether two entries share at least one cell.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_slot < other.end_slot
            && other.start_slot < self.end_slot
    }

    /// One-line description, e.g. `"Algorithms: Mon 1 (09:00) ~ 2 (10:00)"`.
    pub fn summary(&self, axis: &TimeAxis) -> String {
        let start = axis
            .boundary_label(self.start_slot)
            .unwrap_or_else(|| format!("#{}", self.start_slot));
        let end = axis
            .boundary_label(self.end_slot)
            .unwrap_or_else(|| format!("#{}", self.end_slot));
        format!("{}: {} {} ~ {}", self.name, self.day, start, end)
    }
}
