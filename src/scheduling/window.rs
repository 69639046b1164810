//! Scheduling window over one slot's forecast series.

use crate::error::{Result, ScheduleError};
use std::ops::Range;

/// A contiguous day range whose endpoints are already-fixed anchor days.
///
/// The anchors' impressions are credited toward the campaign target before
/// the search begins; only the days strictly between them are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingWindow {
    start_day: usize,
    end_day: usize,
}

impl SchedulingWindow {
    /// Create a window anchored at `start_day` and `end_day`.
    pub fn new(start_day: usize, end_day: usize) -> Result<Self> {
        if end_day <= start_day {
            return Err(ScheduleError::InvalidParameter(format!(
                "window end {end_day} must come after start {start_day}"
            )));
        }
        Ok(Self { start_day, end_day })
    }

    /// First anchor day.
    pub fn start_day(&self) -> usize {
        self.start_day
    }

    /// Second anchor day.
    pub fn end_day(&self) -> usize {
        self.end_day
    }

    /// Number of selectable days strictly inside the window.
    pub fn candidate_count(&self) -> usize {
        self.end_day - self.start_day - 1
    }

    /// Day indices strictly between the anchors.
    pub fn candidate_days(&self) -> Range<usize> {
        self.start_day + 1..self.end_day
    }

    /// Map a candidate position (0-based within the window) to its day index.
    pub fn candidate_day(&self, position: usize) -> usize {
        self.start_day + 1 + position
    }

    /// Check whether a day falls inside the window, anchors included.
    pub fn contains(&self, day: usize) -> bool {
        (self.start_day..=self.end_day).contains(&day)
    }
}
