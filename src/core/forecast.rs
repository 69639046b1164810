//! Forecast matrix produced by the engine.

use crate::core::history::SlotSeries;
use crate::error::{Result, ScheduleError};

/// A horizon-by-slots matrix of forecasted daily impression counts.
///
/// Column order matches the history the forecast was derived from. Cells are
/// non-negative integers; fractional model output is truncated before the
/// matrix is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastMatrix {
    /// Day-major storage: rows[day][slot].
    rows: Vec<Vec<u64>>,
    slots: usize,
}

impl ForecastMatrix {
    /// Assemble a matrix from slot-major columns of equal length.
    pub fn from_columns(columns: Vec<Vec<u64>>) -> Result<Self> {
        let slots = columns.len();
        if slots == 0 {
            return Err(ScheduleError::EmptyData);
        }

        let horizon = columns[0].len();
        for column in &columns {
            if column.len() != horizon {
                return Err(ScheduleError::DimensionMismatch {
                    expected: horizon,
                    got: column.len(),
                });
            }
        }

        let rows = (0..horizon)
            .map(|day| columns.iter().map(|column| column[day]).collect())
            .collect();

        Ok(Self { rows, slots })
    }

    /// Number of forecasted days.
    pub fn horizon(&self) -> usize {
        self.rows.len()
    }

    /// Number of slot columns.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Day-major rows, nearest day first.
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Forecasted impressions for one (day, slot) cell.
    pub fn value(&self, day: usize, slot: usize) -> Result<u64> {
        if day >= self.rows.len() {
            return Err(ScheduleError::DayOutOfBounds {
                index: day,
                days: self.rows.len(),
            });
        }
        if slot >= self.slots {
            return Err(ScheduleError::SlotOutOfBounds {
                index: slot,
                slots: self.slots,
            });
        }
        Ok(self.rows[day][slot])
    }

    /// Column projection for one slot.
    pub fn slot_series(&self, slot: usize) -> Result<SlotSeries> {
        if slot >= self.slots {
            return Err(ScheduleError::SlotOutOfBounds {
                index: slot,
                slots: self.slots,
            });
        }
        let values = self.rows.iter().map(|row| row[slot]).collect();
        Ok(SlotSeries::new(slot, values))
    }
}
