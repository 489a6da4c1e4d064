//! Time axis: the ordered half-hour rows of the weekly timetable.
//!
//! # Slot Model
//!
//! Slot `i` covers `[first_start + i*step, first_start + (i+1)*step)`.
//! Slot starts run from `first_start` through `last_start` inclusive; with
//! the standard configuration (08:00 .. 19:30, 30 min) that is 24 rows.
//!
//! Index `N = len()` is the end-of-day boundary. It is a legal *end* for
//! an interval (ends are exclusive) but never the start of a row.
//!
//! # Labels
//!
//! | Start | Label |
//! |-------|-------|
//! | 08:00 | `0 (08:00)` |
//! | 08:30 | `.5 (08:30)` |
//! | 09:00 | `1 (09:00)` |
//!
//! Labels are cosmetic. Ordering and indexing always use the integer slot.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::{hhmm, ConfigError};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Shape of the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Start of the first row.
    #[serde(with = "hhmm", default = "default_first_start")]
    pub first_start: NaiveTime,
    /// Start of the last row (inclusive).
    #[serde(with = "hhmm", default = "default_last_start")]
    pub last_start: NaiveTime,
    /// Row length in minutes. Must divide an hour evenly.
    #[serde(default = "default_step_minutes")]
    pub step_minutes: u32,
}

fn default_first_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn default_last_start() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 30, 0).unwrap_or(NaiveTime::MIN)
}

fn default_step_minutes() -> u32 {
    30
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            first_start: default_first_start(),
            last_start: default_last_start(),
            step_minutes: default_step_minutes(),
        }
    }
}

impl AxisConfig {
    /// Sets the first row start.
    pub fn with_first_start(mut self, first_start: NaiveTime) -> Self {
        self.first_start = first_start;
        self
    }

    /// Sets the last row start.
    pub fn with_last_start(mut self, last_start: NaiveTime) -> Self {
        self.last_start = last_start;
        self
    }

    /// Sets the row length.
    pub fn with_step_minutes(mut self, step_minutes: u32) -> Self {
        self.step_minutes = step_minutes;
        self
    }
}

/// One row of the axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Row index (0-based).
    pub index: usize,
    /// Wall-clock start of the row.
    pub start: NaiveTime,
    /// Display label, e.g. `"2 (10:00)"`.
    pub label: String,
}

/// The fixed, ordered set of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAxis {
    first_minute: u32,
    step_minutes: u32,
    slots: Vec<TimeSlot>,
}

impl TimeAxis {
    /// Builds an axis from a configuration.
    ///
    /// # Errors
    /// `ConfigError::InvalidAxis` if the step is zero or does not divide an
    /// hour, if `last_start` precedes `first_start`, if `last_start` is not
    /// reachable from `first_start` in whole steps, or if the end-of-day
    /// boundary would pass midnight.
    pub fn new(config: &AxisConfig) -> Result<Self, ConfigError> {
        let step = config.step_minutes;
        if step == 0 || 60 % step != 0 {
            return Err(ConfigError::InvalidAxis(format!(
                "step of {step} minutes does not divide an hour"
            )));
        }

        let first = minute_of_day(config.first_start);
        let last = minute_of_day(config.last_start);
        if last < first {
            return Err(ConfigError::InvalidAxis(format!(
                "last start {} precedes first start {}",
                config.last_start.format("%H:%M"),
                config.first_start.format("%H:%M")
            )));
        }
        if (last - first) % step != 0 {
            return Err(ConfigError::InvalidAxis(format!(
                "last start {} is not a whole number of {step}-minute steps after {}",
                config.last_start.format("%H:%M"),
                config.first_start.format("%H:%M")
            )));
        }
        if last + step >= MINUTES_PER_DAY {
            return Err(ConfigError::InvalidAxis(
                "end-of-day boundary passes midnight".to_string(),
            ));
        }

        let count = ((last - first) / step + 1) as usize;
        Ok(Self::build(first, step, count))
    }

    /// The standard axis: 08:00 through 19:30, 30-minute rows (24 slots).
    pub fn standard() -> Self {
        Self::build(minute_of_day(default_first_start()), default_step_minutes(), 24)
    }

    /// Lays out `count` rows of `step` minutes from minute-of-day `first`.
    /// Callers guarantee the last boundary stays before midnight.
    fn build(first: u32, step: u32, count: usize) -> Self {
        let first_hour = first / 60;
        let slots = (0..count)
            .map(|index| {
                let start = time_at(first + index as u32 * step);
                TimeSlot {
                    index,
                    start,
                    label: slot_label(start, first_hour),
                }
            })
            .collect();
        Self {
            first_minute: first,
            step_minutes: step,
            slots,
        }
    }

    /// Number of rows (`N`).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the axis has no rows. Never true for a constructed axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The end-of-day boundary index (`N`), valid only as an interval end.
    #[inline]
    pub fn end_sentinel(&self) -> usize {
        self.slots.len()
    }

    /// Row length in minutes.
    pub fn step_minutes(&self) -> u32 {
        self.step_minutes
    }

    /// All rows in order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Iterates rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlot> {
        self.slots.iter()
    }

    /// Row at `index`.
    pub fn slot(&self, index: usize) -> Option<&TimeSlot> {
        self.slots.get(index)
    }

    /// Label of row `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|s| s.label.as_str())
    }

    /// Clock time of boundary `index` (`0..=N`).
    ///
    /// Boundary `i < N` is the start of row `i`; boundary `N` is the end
    /// of the last row.
    pub fn boundary_time(&self, index: usize) -> Option<NaiveTime> {
        if index > self.end_sentinel() {
            return None;
        }
        Some(time_at(self.first_minute + index as u32 * self.step_minutes))
    }

    /// Label of boundary `index` (`0..=N`), including the end-of-day boundary.
    pub fn boundary_label(&self, index: usize) -> Option<String> {
        if let Some(label) = self.label(index) {
            return Some(label.to_string());
        }
        let first_hour = self.first_minute / 60;
        self.boundary_time(index).map(|t| slot_label(t, first_hour))
    }

    /// Row containing clock time `time`, if it falls on the axis.
    pub fn slot_for_time(&self, time: NaiveTime) -> Option<usize> {
        let minute = minute_of_day(time);
        if minute < self.first_minute {
            return None;
        }
        let index = ((minute - self.first_minute) / self.step_minutes) as usize;
        (index < self.len()).then_some(index)
    }

    /// Row whose label is exactly `label`.
    pub fn slot_for_label(&self, label: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.label == label)
    }

    /// Boundary (`0..=N`) whose label is exactly `label`.
    pub fn boundary_for_label(&self, label: &str) -> Option<usize> {
        self.slot_for_label(label).or_else(|| {
            let sentinel = self.end_sentinel();
            (self.boundary_label(sentinel).as_deref() == Some(label)).then_some(sentinel)
        })
    }
}

impl Default for TimeAxis {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a TimeAxis {
    type Item = &'a TimeSlot;
    type IntoIter = std::slice::Iter<'a, TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn time_at(minute_of_day: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Whole hours are numbered from the first hour; other starts show the
/// fraction of the hour.
fn slot_label(start: NaiveTime, first_hour: u32) -> String {
    let clock = start.format("%H:%M");
    match start.minute() {
        0 => format!("{} ({clock})", start.hour().saturating_sub(first_hour)),
        30 => format!(".5 ({clock})"),
        m => format!(".{} ({clock})", m * 100 / 60),
    }
}
