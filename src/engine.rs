//! Forecast engine: independent per-slot extrapolation over a history.

use crate::core::{ForecastMatrix, ImpressionHistory};
use crate::error::{Result, ScheduleError};
use crate::models::{AutoRegressive, DEFAULT_LAG_ORDER};

/// Configuration for a forecast run.
///
/// A single horizon parameter is threaded through both the per-slot and the
/// aggregate forecasting calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastConfig {
    /// Lag order of the per-slot autoregressive model.
    pub lag_order: usize,
    /// Number of future days to forecast.
    pub horizon: usize,
}

impl ForecastConfig {
    /// Create a configuration with an explicit lag order and horizon.
    pub fn new(lag_order: usize, horizon: usize) -> Self {
        Self { lag_order, horizon }
    }

    /// Keep the default lag order and set the horizon.
    pub fn with_horizon(horizon: usize) -> Self {
        Self {
            horizon,
            ..Self::default()
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            lag_order: DEFAULT_LAG_ORDER,
            horizon: 3,
        }
    }
}

/// Forecast future daily impressions for every slot in the history.
///
/// Each slot column gets its own [`AutoRegressive`] fit and forward-chained
/// extrapolation; column order is preserved in the output. A failed fit on
/// any slot fails the whole call rather than skipping the slot.
pub fn forecast(history: &ImpressionHistory, config: ForecastConfig) -> Result<ForecastMatrix> {
    let mut columns = Vec::with_capacity(history.slots());

    for slot in 0..history.slots() {
        let series = history.slot_series(slot)?;
        let mut model = AutoRegressive::new(config.lag_order);
        model.fit(&series)?;

        let raw = model.predict(config.horizon)?;
        if raw.iter().any(|value| !value.is_finite()) {
            return Err(ScheduleError::DegenerateFit(format!(
                "extrapolation for slot {slot} diverged"
            )));
        }

        columns.push(raw.into_iter().map(truncate_impressions).collect());
    }

    ForecastMatrix::from_columns(columns)
}

/// Truncate a raw model prediction to an impression count.
///
/// Fractional impressions are not meaningful, so predictions round down;
/// negative extrapolations clamp to zero.
fn truncate_impressions(value: f64) -> u64 {
    if value <= 0.0 {
        0
    } else {
        value.floor() as u64
    }
}
