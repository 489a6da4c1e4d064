//! Input validation for course entries.
//!
//! Runs at the boundary between an input surface and the course list,
//! before an entry ever reaches the compositor. Detects:
//! - Blank course names
//! - Empty or reversed intervals (`start >= end`)
//! - Slots outside the time axis
//! - Labels and day names that do not resolve
//!
//! The compositor assumes validated input. Feeding it an invalid interval
//! is a caller bug and panics there.

use crate::axis::TimeAxis;
use crate::models::{CourseEntry, EntryDraft};

/// Validation result for a whole snapshot.
pub type ValidationResult = Result<(), Vec<(usize, EntryError)>>;

/// Why an entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// The course name is missing or only whitespace.
    #[error("Course name must not be empty")]
    EmptyName,

    /// The interval has no duration.
    #[error("End slot {end} must be after start slot {start}")]
    InvalidInterval { start: usize, end: usize },

    /// A slot lies outside the time axis.
    #[error("Slot {slot} is outside the time axis (limit {limit})")]
    SlotOutOfRange { slot: usize, limit: usize },

    /// A time label matched no axis row or boundary.
    #[error("Unknown time label: {0}")]
    UnknownLabel(String),

    /// A day name matched no day of the week.
    #[error("Unknown day: {0}")]
    UnknownDay(String),
}

/// Validates one draft against an axis.
///
/// Checks run in order: name, start range, end range, interval. The first
/// failure is returned.
pub fn validate_draft(draft: &EntryDraft, axis: &TimeAxis) -> Result<(), EntryError> {
    check_interval(&draft.name, draft.start_slot, draft.end_slot, axis)
}

/// Validates every entry of a snapshot, collecting all failures with
/// their positions.
///
/// Entries built through [`CourseEntry::from_draft`] always pass. This is
/// for snapshots assembled elsewhere (deserialized, hand-built).
pub fn validate_entries(entries: &[CourseEntry], axis: &TimeAxis) -> ValidationResult {
    let errors: Vec<(usize, EntryError)> = entries
        .iter()
        .enumerate()
        .filter_map(|(i, e)| {
            check_interval(&e.name, e.start_slot, e.end_slot, axis)
                .err()
                .map(|err| (i, err))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_interval(
    name: &str,
    start_slot: usize,
    end_slot: usize,
    axis: &TimeAxis,
) -> Result<(), EntryError> {
    if name.trim().is_empty() {
        return Err(EntryError::EmptyName);
    }

    // Starts must be rows; ends may also be the end-of-day boundary.
    if start_slot >= axis.len() {
        return Err(EntryError::SlotOutOfRange {
            slot: start_slot,
            limit: axis.len() - 1,
        });
    }
    if end_slot > axis.end_sentinel() {
        return Err(EntryError::SlotOutOfRange {
            slot: end_slot,
            limit: axis.end_sentinel(),
        });
    }

    if start_slot >= end_slot {
        return Err(EntryError::InvalidInterval {
            start: start_slot,
            end: end_slot,
        });
    }

    Ok(())
}
