//! Weekly timetable compositor for the U-Engine ecosystem.
//!
//! Turns a list of course meetings (name, day, start slot, end slot) into a
//! render-ready weekly grid: which cells conflict, which rows merge into a
//! single course block, and which colour each course gets.
//!
//! # Modules
//!
//! - **`axis`**: The half-hour time axis (08:00-19:30 by default) and labels
//! - **`color`**: Deterministic name → palette colour assignment
//! - **`compositor`**: `compose`: conflict map, occupancy and cell layout
//! - **`models`**: Domain types (`Day`, `Color`, `CourseEntry`, `CourseList`)
//! - **`validation`**: Input checks at the form boundary (`EntryError`)
//! - **`render`**: Reference HTML and plain-text renderers
//! - **`config`**: TOML configuration for axis shape and rendering
//!
//! # Example
//!
//! ```
//! use u_timetable::axis::TimeAxis;
//! use u_timetable::color::HashColorAssigner;
//! use u_timetable::compositor::compose;
//! use u_timetable::models::{CourseList, Day, EntryDraft};
//!
//! let axis = TimeAxis::standard();
//! let colors = HashColorAssigner;
//! let mut courses = CourseList::new();
//! courses.add_draft(&EntryDraft::new("Algorithms", Day::Mon, 2, 4), &axis, &colors).unwrap();
//! courses.add_draft(&EntryDraft::new("Physics", Day::Mon, 3, 5), &axis, &colors).unwrap();
//!
//! let composition = compose(courses.snapshot(), &axis, &colors);
//! assert_eq!(composition.conflict_cells(), vec![(Day::Mon, 3)]);
//! ```
//!
//! # Architecture
//!
//! Composition is a pure function of an immutable snapshot. The caller owns
//! the course list and may change it freely between calls; every call
//! rebuilds the grid from scratch.

pub mod axis;
pub mod color;
pub mod compositor;
pub mod config;
pub mod models;
pub mod render;
pub mod validation;
