//! End-to-end slot planning.
//!
//! Ties the two components together: forecast the history, credit the
//! window's anchor days from the requested slot's forecast series, then
//! search for the fewest extra days that reach the target.

use crate::core::{ForecastMatrix, ImpressionHistory};
use crate::engine::{forecast, ForecastConfig};
use crate::error::{Result, ScheduleError};
use crate::scheduling::{
    select_minimal_days, SchedulingWindow, SelectionOutcome, SelectorConfig,
};
use chrono::{Days, NaiveDate};

/// One slot-scheduling query.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Slot column to schedule.
    pub slot: usize,
    /// Window over the forecast series; both endpoints are anchor days.
    pub window: SchedulingWindow,
    /// Campaign impression goal.
    pub target: i64,
    /// Forecast settings.
    pub forecast: ForecastConfig,
    /// Search limits.
    pub selector: SelectorConfig,
}

impl PlanRequest {
    /// Build a request with default forecast and selector settings, sizing
    /// the horizon to cover the window.
    pub fn new(slot: usize, window: SchedulingWindow, target: i64) -> Self {
        Self {
            slot,
            window,
            target,
            forecast: ForecastConfig::with_horizon(window.end_day() + 1),
            selector: SelectorConfig::default(),
        }
    }
}

/// Result of planning a single slot.
#[derive(Debug, Clone)]
pub struct SlotPlan {
    /// Forecast the plan was computed against.
    pub forecast: ForecastMatrix,
    /// Impressions credited from the two anchor days.
    pub anchor_impressions: u64,
    /// Day-selection outcome.
    pub outcome: SelectionOutcome,
}

impl SlotPlan {
    /// Chosen day indices as calendar dates, given the date of forecast
    /// day 0. `None` when the target was infeasible or a date overflows.
    pub fn chosen_dates(&self, first_forecast_day: NaiveDate) -> Option<Vec<NaiveDate>> {
        let selection = self.outcome.selection()?;
        selection
            .chosen_days
            .iter()
            .map(|&day| first_forecast_day.checked_add_days(Days::new(day as u64)))
            .collect()
    }
}

/// Forecast a history and select the minimal days for one slot.
///
/// Day indices in the request's window refer to the forecast series (day 0
/// is the first forecast day). The window must fit inside the forecast
/// horizon.
pub fn plan_slot(history: &ImpressionHistory, request: &PlanRequest) -> Result<SlotPlan> {
    let matrix = forecast(history, request.forecast)?;
    let series = matrix.slot_series(request.slot)?;
    let values = series.values();

    let window = &request.window;
    if window.end_day() >= values.len() {
        return Err(ScheduleError::DayOutOfBounds {
            index: window.end_day(),
            days: values.len(),
        });
    }

    let anchor_impressions = values[window.start_day()] + values[window.end_day()];
    let candidates = &values[window.start_day() + 1..window.end_day()];

    let outcome = select_minimal_days(
        candidates,
        request.target,
        window,
        anchor_impressions,
        request.selector,
    )?;

    Ok(SlotPlan {
        forecast: matrix,
        anchor_impressions,
        outcome,
    })
}
