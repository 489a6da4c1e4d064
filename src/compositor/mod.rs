//! Grid compositor: course entries in, conflict map and cell layout out.
//!
//! The compositor turns an ordered snapshot of course entries into
//! everything a renderer needs:
//!
//! - **`ConflictMap`**: how many entries cover each `(day, slot)`.
//! - **`LayoutModel`**: one [`CellPlan`] per cell, merging rows where a
//!   single course holds them and flattening rows where courses collide.
//! - **Legend**: the colour of every distinct course name.
//!
//! Composition is recomputed from scratch for every snapshot. There is no
//! incremental state to go stale.
//!
//! # Usage
//!
//! ```
//! use u_timetable::axis::TimeAxis;
//! use u_timetable::color::HashColorAssigner;
//! use u_timetable::compositor::{compose, CellPlan};
//! use u_timetable::models::{CourseEntry, Day};
//!
//! let axis = TimeAxis::standard();
//! let colors = HashColorAssigner;
//! let entries = vec![CourseEntry::new("Algorithms", Day::Mon, 2, 4, &colors)];
//!
//! let composition = compose(&entries, &axis, &colors);
//! assert_eq!(composition.plan(Day::Mon, 2).map(CellPlan::row_span), Some(2));
//! assert_eq!(composition.plan(Day::Mon, 3), Some(&CellPlan::Continuation));
//! ```

mod compose;
mod grid;
mod layout;

pub use compose::{compose, Composition};
pub use grid::Grid;
pub use layout::{CellPlan, ConflictMap, LayoutModel, OccupancyGrid, Span};
