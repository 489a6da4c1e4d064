//! Ordered list of course entries.
//!
//! The list owns the user's entries between interactions. Composition
//! never holds on to it: callers pass [`CourseList::snapshot`] to
//! [`compose`](crate::compositor::compose) and get owned output back, so
//! the list may be mutated freely between calls.

use serde::{Deserialize, Serialize};

use super::{CourseEntry, EntryDraft};
use crate::axis::TimeAxis;
use crate::color::ColorAssigner;
use crate::validation::EntryError;

/// Insertion-ordered collection of course entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseList {
    entries: Vec<CourseEntry>,
}

impl CourseList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already-validated entry.
    pub fn add(&mut self, entry: CourseEntry) {
        log::debug!(
            "adding course '{}' on {} [{}, {})",
            entry.name,
            entry.day,
            entry.start_slot,
            entry.end_slot
        );
        self.entries.push(entry);
    }

    /// Validates a draft and appends the resulting entry.
    ///
    /// On error the list is unchanged.
    pub fn add_draft<C: ColorAssigner + ?Sized>(
        &mut self,
        draft: &EntryDraft,
        axis: &TimeAxis,
        colors: &C,
    ) -> Result<&CourseEntry, EntryError> {
        let entry = CourseEntry::from_draft(draft, axis, colors).inspect_err(|err| {
            log::warn!("rejected course draft '{}': {err}", draft.name);
        })?;
        self.add(entry);
        Ok(self
            .entries
            .last()
            .unwrap_or_else(|| unreachable!("entry was just pushed")))
    }

    /// Removes and returns the entry at `index`, shifting later entries up.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<CourseEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        log::debug!("removed course '{}' at position {index}", removed.name);
        Some(removed)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The current entries, in insertion order.
    pub fn snapshot(&self) -> &[CourseEntry] {
        &self.entries
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&CourseEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CourseEntry> {
        self.entries.iter()
    }

    /// One summary line per entry, in insertion order.
    pub fn summaries(&self, axis: &TimeAxis) -> Vec<String> {
        self.entries.iter().map(|e| e.summary(axis)).collect()
    }
}

impl FromIterator<CourseEntry> for CourseList {
    fn from_iter<I: IntoIterator<Item = CourseEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CourseList {
    type Item = &'a CourseEntry;
    type IntoIter = std::slice::Iter<'a, CourseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
