//! Timetable composition.
//!
//! # Algorithm
//!
//! 1. Mark occupancy: for every entry, push its snapshot position onto each
//!    `(day, slot)` in `[start_slot, end_slot)` and bump the count.
//! 2. Plan each cell from its occupants:
//!    - none → `Empty`
//!    - one → `SingleSpan` if the slot above is not held by that same entry
//!      alone, else `Continuation`. The span runs for as long as the entry
//!      stays the sole occupant.
//!    - several → `Conflict`, occupants in snapshot order.
//! 3. Colour every distinct name for the legend.
//!
//! A span therefore ends where a conflict begins and restarts after it:
//! `A = [2,4)`, `B = [3,5)` yields `SingleSpan{A,1}`, `Conflict{A,B}`,
//! `SingleSpan{B,1}`.
//!
//! # Complexity
//! O(e·d + 7·N) for e entries of average duration d over N slots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CellPlan, ConflictMap, Grid, LayoutModel, OccupancyGrid};
use crate::axis::TimeAxis;
use crate::color::ColorAssigner;
use crate::models::{Color, CourseEntry, Day};

/// Everything a renderer needs, computed from one snapshot.
///
/// Owns all of its data; nothing borrows the input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// Occupancy counts per cell.
    pub conflicts: ConflictMap,
    /// Covering entries per cell.
    pub occupancy: OccupancyGrid,
    /// Rendering plan per cell.
    pub layout: LayoutModel,
    /// Colour of every distinct course name, ordered by name.
    pub legend: BTreeMap<String, Color>,
}

impl Composition {
    /// Occupancy count at `(day, slot)`.
    pub fn conflict_count(&self, day: Day, slot: usize) -> usize {
        self.conflicts.count(day, slot)
    }

    /// Whether `(day, slot)` is covered by two or more entries.
    pub fn is_conflict(&self, day: Day, slot: usize) -> bool {
        self.conflicts.is_conflict(day, slot)
    }

    /// Whether any cell is in conflict.
    pub fn has_conflicts(&self) -> bool {
        self.conflicts.has_conflicts()
    }

    /// All conflicting cells.
    pub fn conflict_cells(&self) -> Vec<(Day, usize)> {
        self.conflicts.conflict_cells()
    }

    /// Entries covering `(day, slot)`, in snapshot order.
    pub fn occupancy(&self, day: Day, slot: usize) -> &[CourseEntry] {
        self.occupancy.at(day, slot)
    }

    /// Rendering plan at `(day, slot)`.
    pub fn plan(&self, day: Day, slot: usize) -> Option<&CellPlan> {
        self.layout.plan(day, slot)
    }

    /// Number of slots per day.
    pub fn slot_count(&self) -> usize {
        self.layout.slot_count()
    }
}

/// Composes a snapshot of entries into conflict counts and a cell layout.
///
/// Pure and deterministic: the same snapshot always yields an equal
/// `Composition`, and permuting the snapshot changes only the order of
/// entries inside `Conflict` cells (see [`LayoutModel::canonical`]).
///
/// # Panics
/// If an entry has `start_slot >= end_slot` or `end_slot` past the
/// end-of-day boundary. Entries are validated before they reach here; a
/// bad one is a caller bug.
pub fn compose<C: ColorAssigner + ?Sized>(
    entries: &[CourseEntry],
    axis: &TimeAxis,
    colors: &C,
) -> Composition {
    let slot_count = axis.len();

    // Occupants are snapshot positions, so equal entries stay distinct.
    let mut occupants: Grid<Vec<usize>> = Grid::filled(slot_count, Vec::new());
    let mut counts: Grid<usize> = Grid::filled(slot_count, 0);

    for (position, entry) in entries.iter().enumerate() {
        assert!(
            entry.start_slot < entry.end_slot,
            "course '{}' has empty interval [{}, {})",
            entry.name,
            entry.start_slot,
            entry.end_slot
        );
        assert!(
            entry.end_slot <= axis.end_sentinel(),
            "course '{}' ends at slot {} past the end-of-day boundary {}",
            entry.name,
            entry.end_slot,
            axis.end_sentinel()
        );

        for slot in entry.start_slot..entry.end_slot {
            occupants[(entry.day, slot)].push(position);
            counts[(entry.day, slot)] += 1;
        }
    }

    let layout = occupants.map(|day, slot, cell| match cell.as_slice() {
        [] => CellPlan::Empty,
        [only] => {
            if slot > 0 && sole_occupant(&occupants, day, slot - 1) == Some(*only) {
                CellPlan::Continuation
            } else {
                let span_len = (slot..slot_count)
                    .take_while(|&s| sole_occupant(&occupants, day, s) == Some(*only))
                    .count();
                let entry = &entries[*only];
                CellPlan::SingleSpan {
                    entry: entry.clone(),
                    span_len,
                    color: colors.color_for(&entry.name),
                }
            }
        }
        many => CellPlan::Conflict {
            entries: many.iter().map(|&p| entries[p].clone()).collect(),
        },
    });

    let occupancy: Grid<Vec<CourseEntry>> =
        occupants.map(|_, _, cell| cell.iter().map(|&p| entries[p].clone()).collect());

    let legend: BTreeMap<String, Color> = entries
        .iter()
        .map(|e| (e.name.clone(), colors.color_for(&e.name)))
        .collect();

    let conflicts = ConflictMap(counts);
    log::debug!(
        "composed {} entries over {} slots: {} conflict cells, {} courses",
        entries.len(),
        slot_count,
        conflicts.conflict_cells().len(),
        legend.len()
    );

    Composition {
        conflicts,
        occupancy: OccupancyGrid(occupancy),
        layout: LayoutModel(layout),
        legend,
    }
}

/// Snapshot position of the only entry at `(day, slot)`, if exactly one.
fn sole_occupant(occupants: &Grid<Vec<usize>>, day: Day, slot: usize) -> Option<usize> {
    match occupants.get(day, slot).map(Vec::as_slice) {
        Some([only]) => Some(*only),
        _ => None,
    }
}
