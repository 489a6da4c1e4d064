//! Timetable domain models.
//!
//! Plain data types shared by the axis, the colour assigner, the
//! compositor and the renderers.
//!
//! # Domain Mappings
//!
//! | u-timetable | Course registration | Room booking | Shift planning |
//! |-------------|---------------------|--------------|----------------|
//! | CourseEntry | Class meeting | Reservation | Shift |
//! | Day | Weekday column | Weekday column | Weekday column |
//! | CourseList | Registered classes | Bookings | Roster |

mod color;
mod course_list;
mod day;
mod entry;

pub use color::{Color, CONFLICT_HEX};
pub use course_list::CourseList;
pub use day::Day;
pub use entry::{CourseEntry, EntryDraft};
