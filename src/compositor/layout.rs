//! Composition output types: conflict counts, occupancy, and cell plans.
//!
//! # Cell Plans
//!
//! | Plan | Meaning | Renderer action |
//! |------|---------|-----------------|
//! | `Empty` | No course in this cell | Blank cell |
//! | `SingleSpan` | First row of a run held by one course | One cell spanning `span_len` rows |
//! | `Continuation` | Later row of such a run | Nothing (covered by the span) |
//! | `Conflict` | Two or more courses | One cell, names stacked, conflict colour |
//!
//! Conflicts are never merged across rows, even when the same courses
//! collide on consecutive slots.

use serde::{Deserialize, Serialize};

use super::Grid;
use crate::models::{Color, CourseEntry, Day};

/// Per-cell occupancy counts.
///
/// A cell is in conflict iff its count exceeds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictMap(pub(crate) Grid<usize>);

impl ConflictMap {
    /// Number of entries covering `(day, slot)`. Zero outside the axis.
    pub fn count(&self, day: Day, slot: usize) -> usize {
        self.0.get(day, slot).copied().unwrap_or(0)
    }

    /// Whether two or more entries cover `(day, slot)`.
    pub fn is_conflict(&self, day: Day, slot: usize) -> bool {
        self.count(day, slot) > 1
    }

    /// All conflicting cells, day by day, slot by slot.
    pub fn conflict_cells(&self) -> Vec<(Day, usize)> {
        self.0
            .iter()
            .filter(|&(_, _, &count)| count > 1)
            .map(|(day, slot, _)| (day, slot))
            .collect()
    }

    /// Whether any cell is in conflict.
    pub fn has_conflicts(&self) -> bool {
        self.0.iter().any(|(_, _, &count)| count > 1)
    }

    /// Sum of all counts (total occupied slot-cells).
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, _, &count)| count).sum()
    }

    /// Underlying count matrix.
    pub fn grid(&self) -> &Grid<usize> {
        &self.0
    }
}

/// Per-cell lists of covering entries, in snapshot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid(pub(crate) Grid<Vec<CourseEntry>>);

impl OccupancyGrid {
    /// Entries covering `(day, slot)`. Empty outside the axis.
    pub fn at(&self, day: Day, slot: usize) -> &[CourseEntry] {
        self.0.get(day, slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of cells in which an entry equal to `entry` appears.
    pub fn cells_containing(&self, entry: &CourseEntry) -> usize {
        self.0
            .iter()
            .filter(|(_, _, occupants)| occupants.contains(entry))
            .count()
    }

    /// Underlying matrix.
    pub fn grid(&self) -> &Grid<Vec<CourseEntry>> {
        &self.0
    }
}

/// Rendering plan for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellPlan {
    /// Unoccupied.
    Empty,
    /// Covered by a `SingleSpan` at an earlier slot of the same day.
    Continuation,
    /// First slot of a run held by a single entry.
    SingleSpan {
        /// The sole occupant.
        entry: CourseEntry,
        /// Rows in the run, including this one.
        span_len: usize,
        /// Fill colour for the merged cell.
        color: Color,
    },
    /// Two or more entries cover this slot.
    Conflict {
        /// Every covering entry, in snapshot order.
        entries: Vec<CourseEntry>,
    },
}

impl CellPlan {
    /// Whether this is `Empty`.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellPlan::Empty)
    }

    /// Whether this is `Continuation`.
    pub fn is_continuation(&self) -> bool {
        matches!(self, CellPlan::Continuation)
    }

    /// Whether this is `Conflict`.
    pub fn is_conflict(&self) -> bool {
        matches!(self, CellPlan::Conflict { .. })
    }

    /// Whether a renderer must emit a cell here (everything but `Continuation`).
    pub fn is_rendered(&self) -> bool {
        !self.is_continuation()
    }

    /// Entries named by this plan. `Continuation` names none.
    pub fn entries(&self) -> Vec<&CourseEntry> {
        match self {
            CellPlan::Empty | CellPlan::Continuation => Vec::new(),
            CellPlan::SingleSpan { entry, .. } => vec![entry],
            CellPlan::Conflict { entries } => entries.iter().collect(),
        }
    }

    /// Rows covered by this plan: `span_len` for spans, 1 for rendered
    /// cells, 0 for continuations.
    pub fn row_span(&self) -> usize {
        match self {
            CellPlan::SingleSpan { span_len, .. } => *span_len,
            CellPlan::Continuation => 0,
            CellPlan::Empty | CellPlan::Conflict { .. } => 1,
        }
    }
}

/// A merged span found in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Column the span sits in.
    pub day: Day,
    /// First row of the span.
    pub start_slot: usize,
    /// Number of merged rows.
    pub span_len: usize,
    /// The course filling the span.
    pub entry: &'a CourseEntry,
}

/// Per-cell rendering plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutModel(pub(crate) Grid<CellPlan>);

impl LayoutModel {
    /// Plan for `(day, slot)`, if `slot` is on the axis.
    pub fn plan(&self, day: Day, slot: usize) -> Option<&CellPlan> {
        self.0.get(day, slot)
    }

    /// Number of slots per day.
    pub fn slot_count(&self) -> usize {
        self.0.slot_count()
    }

    /// All plans of one day, in slot order.
    pub fn column(&self, day: Day) -> &[CellPlan] {
        self.0.column(day)
    }

    /// Every `SingleSpan`, day by day, slot by slot.
    pub fn spans(&self) -> Vec<Span<'_>> {
        self.0
            .iter()
            .filter_map(|(day, slot, plan)| match plan {
                CellPlan::SingleSpan {
                    entry, span_len, ..
                } => Some(Span {
                    day,
                    start_slot: slot,
                    span_len: *span_len,
                    entry,
                }),
                _ => None,
            })
            .collect()
    }

    /// Whether every cell is `Empty`.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|(_, _, plan)| plan.is_empty())
    }

    /// Copy with every conflict list sorted.
    ///
    /// Conflict lists follow snapshot order, so two permutations of the same
    /// entries differ only there. The canonical form is identical for all
    /// permutations.
    pub fn canonical(&self) -> LayoutModel {
        LayoutModel(self.0.map(|_, _, plan| match plan {
            CellPlan::Conflict { entries } => {
                let mut sorted = entries.clone();
                sorted.sort();
                CellPlan::Conflict { entries: sorted }
            }
            other => other.clone(),
        }))
    }

    /// Underlying matrix.
    pub fn grid(&self) -> &Grid<CellPlan> {
        &self.0
    }
}
