//! Historical impression data for a set of ad slots.

use crate::error::{Result, ScheduleError};
use chrono::{Days, NaiveDate};

/// Number of daily observations a history must contain.
pub const HISTORY_DAYS: usize = 8;

/// One slot's ordered daily impression counts.
///
/// The single-column projection of a history (or forecast) matrix; the unit
/// the forecasting model fits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSeries {
    slot: usize,
    values: Vec<u64>,
}

impl SlotSeries {
    /// Create a series for the given slot index.
    pub fn new(slot: usize, values: Vec<u64>) -> Self {
        Self { slot, values }
    }

    /// Slot index this series was projected from.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Ordered daily impression counts, oldest first.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values widened to `f64` for model fitting.
    pub fn to_f64(&self) -> Vec<f64> {
        self.values.iter().map(|&v| v as f64).collect()
    }
}

/// An 8-day by S-slot matrix of observed daily impressions.
///
/// Rows are days (oldest to newest), columns are slots. Values are read-only
/// once the history is constructed; the row count is validated up front so
/// every history reaching the forecast engine has exactly [`HISTORY_DAYS`]
/// observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpressionHistory {
    /// Day-major storage: rows[day][slot].
    rows: Vec<Vec<u64>>,
    slots: usize,
    start_date: Option<NaiveDate>,
}

impl ImpressionHistory {
    /// Build a history from day-major rows.
    ///
    /// Fails with [`ScheduleError::InvalidInputShape`] unless exactly
    /// [`HISTORY_DAYS`] rows are supplied, and with
    /// [`ScheduleError::DimensionMismatch`] if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        if rows.len() != HISTORY_DAYS {
            return Err(ScheduleError::InvalidInputShape {
                expected: HISTORY_DAYS,
                got: rows.len(),
            });
        }

        let slots = rows[0].len();
        if slots == 0 {
            return Err(ScheduleError::EmptyData);
        }

        for row in &rows {
            if row.len() != slots {
                return Err(ScheduleError::DimensionMismatch {
                    expected: slots,
                    got: row.len(),
                });
            }
        }

        Ok(Self {
            rows,
            slots,
            start_date: None,
        })
    }

    /// Attach the calendar date of the first observed day.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Number of observed days (always [`HISTORY_DAYS`]).
    pub fn days(&self) -> usize {
        HISTORY_DAYS
    }

    /// Number of slot columns.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Day-major rows, oldest day first.
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Impression count for one (day, slot) cell.
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

    /// Calendar date of an observed day, when a start date is set.
    pub fn date_of(&self, day: usize) -> Option<NaiveDate> {
        if day >= HISTORY_DAYS {
            return None;
        }
        self.start_date?.checked_add_days(Days::new(day as u64))
    }

    /// Calendar date of the first forecast day (the day after the history
    /// ends), when a start date is set.
    pub fn first_forecast_date(&self) -> Option<NaiveDate> {
        self.start_date?
            .checked_add_days(Days::new(HISTORY_DAYS as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Vec<u64>> {
        (0..HISTORY_DAYS as u64)
            .map(|d| vec![10 * d, 20 * d, 5])
            .collect()
    }

    #[test]
    fn history_accepts_exactly_eight_rows() {
        let history = ImpressionHistory::from_rows(sample_rows()).unwrap();
        assert_eq!(history.days(), 8);
        assert_eq!(history.slots(), 3);
        assert_eq!(history.value(3, 1).unwrap(), 60);
    }

    #[test]
    fn history_rejects_wrong_row_count() {
        let mut rows = sample_rows();
        rows.pop();
        assert_eq!(
            ImpressionHistory::from_rows(rows),
            Err(ScheduleError::InvalidInputShape {
                expected: 8,
                got: 7
            })
        );

        let mut rows = sample_rows();
        rows.push(vec![1, 2, 3]);
        assert!(matches!(
            ImpressionHistory::from_rows(rows),
            Err(ScheduleError::InvalidInputShape { got: 9, .. })
        ));
    }

    #[test]
    fn history_rejects_ragged_rows() {
        let mut rows = sample_rows();
        rows[4].pop();
        assert_eq!(
            ImpressionHistory::from_rows(rows),
            Err(ScheduleError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn history_rejects_zero_slots() {
        let rows = vec![vec![]; HISTORY_DAYS];
        assert_eq!(
            ImpressionHistory::from_rows(rows),
            Err(ScheduleError::EmptyData)
        );
    }

    #[test]
    fn slot_series_projects_one_column() {
        let history = ImpressionHistory::from_rows(sample_rows()).unwrap();
        let series = history.slot_series(0).unwrap();
        assert_eq!(series.slot(), 0);
        assert_eq!(series.len(), 8);
        assert_eq!(series.values()[2], 20);

        assert!(matches!(
            history.slot_series(3),
            Err(ScheduleError::SlotOutOfBounds { index: 3, slots: 3 })
        ));
    }

    #[test]
    fn value_bounds_are_checked() {
        let history = ImpressionHistory::from_rows(sample_rows()).unwrap();
        assert!(matches!(
            history.value(8, 0),
            Err(ScheduleError::DayOutOfBounds { index: 8, days: 8 })
        ));
        assert!(matches!(
            history.value(0, 9),
            Err(ScheduleError::SlotOutOfBounds { index: 9, slots: 3 })
        ));
    }

    #[test]
    fn dates_follow_the_start_date() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let history = ImpressionHistory::from_rows(sample_rows())
            .unwrap()
            .with_start_date(start);

        assert_eq!(history.date_of(0), Some(start));
        assert_eq!(
            history.date_of(7),
            NaiveDate::from_ymd_opt(2025, 3, 8)
        );
        assert_eq!(history.date_of(8), None);
        assert_eq!(
            history.first_forecast_date(),
            NaiveDate::from_ymd_opt(2025, 3, 9)
        );
    }

    #[test]
    fn dates_absent_without_start_date() {
        let history = ImpressionHistory::from_rows(sample_rows()).unwrap();
        assert_eq!(history.date_of(0), None);
        assert_eq!(history.first_forecast_date(), None);
    }

    #[test]
    fn slot_series_widens_to_f64() {
        let series = SlotSeries::new(2, vec![1, 2, 3]);
        assert_eq!(series.to_f64(), vec![1.0, 2.0, 3.0]);
        assert!(!series.is_empty());
    }
}
