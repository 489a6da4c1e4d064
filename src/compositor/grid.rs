//! Day × slot matrix.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::models::Day;

/// A dense `Day × slot` matrix, stored day-major.
///
/// Every day has the same number of slots. Indexing with a slot outside
/// `0..slot_count()` panics; use [`Grid::get`] for checked access.
/// Deserializing rejects payloads whose cell count is not
/// `slot_count * 7`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Grid<T> {
    slot_count: usize,
    cells: Vec<T>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid<T> {
    slot_count: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = String;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        let expected = raw.slot_count.checked_mul(Day::COUNT);
        if expected != Some(raw.cells.len()) {
            return Err(format!(
                "grid with {} slots per day needs {} cells, got {}",
                raw.slot_count,
                raw.slot_count.saturating_mul(Day::COUNT),
                raw.cells.len()
            ));
        }
        Ok(Self {
            slot_count: raw.slot_count,
            cells: raw.cells,
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(slot_count: usize, value: T) -> Self {
        Self {
            slot_count,
            cells: vec![value; slot_count * Day::COUNT],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by evaluating `f` for every cell, day by day, slot by slot.
    pub fn from_fn(slot_count: usize, mut f: impl FnMut(Day, usize) -> T) -> Self {
        let cells = Day::ALL
            .iter()
            .flat_map(|&day| (0..slot_count).map(move |slot| (day, slot)))
            .map(|(day, slot)| f(day, slot))
            .collect();
        Self { slot_count, cells }
    }

    /// Number of slots per day.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Cell at `(day, slot)`, if `slot` is in range.
    pub fn get(&self, day: Day, slot: usize) -> Option<&T> {
        (slot < self.slot_count).then(|| &self.cells[self.offset(day, slot)])
    }

    /// Mutable cell at `(day, slot)`, if `slot` is in range.
    pub fn get_mut(&mut self, day: Day, slot: usize) -> Option<&mut T> {
        if slot < self.slot_count {
            let offset = self.offset(day, slot);
            Some(&mut self.cells[offset])
        } else {
            None
        }
    }

    /// All cells of one day, in slot order.
    pub fn column(&self, day: Day) -> &[T] {
        let start = day.index() * self.slot_count;
        &self.cells[start..start + self.slot_count]
    }

    /// Iterates `(day, slot, cell)` day by day, slot by slot.
    pub fn iter(&self) -> impl Iterator<Item = (Day, usize, &T)> + '_ {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            // slot_count > 0 whenever cells is non-empty
            (Day::ALL[i / self.slot_count], i % self.slot_count, cell)
        })
    }

    /// Applies `f` to every cell, keeping positions.
    pub fn map<U>(&self, mut f: impl FnMut(Day, usize, &T) -> U) -> Grid<U> {
        Grid {
            slot_count: self.slot_count,
            cells: self.iter().map(|(d, s, c)| f(d, s, c)).collect(),
        }
    }

    #[inline]
    fn offset(&self, day: Day, slot: usize) -> usize {
        day.index() * self.slot_count + slot
    }
}

impl<T> Index<(Day, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (day, slot): (Day, usize)) -> &T {
        assert!(
            slot < self.slot_count,
            "slot {slot} out of range for grid with {} slots",
            self.slot_count
        );
        &self.cells[self.offset(day, slot)]
    }
}

impl<T> IndexMut<(Day, usize)> for Grid<T> {
    fn index_mut(&mut self, (day, slot): (Day, usize)) -> &mut T {
        assert!(
            slot < self.slot_count,
            "slot {slot} out of range for grid with {} slots",
            self.slot_count
        );
        let offset = self.offset(day, slot);
        &mut self.cells[offset]
    }
}
