//! Autoregressive model for a single slot series.

use crate::core::SlotSeries;
use crate::error::{Result, ScheduleError};
use crate::models::lstsq::lstsq_intercept;

/// Lag order used when the caller does not override it.
pub const DEFAULT_LAG_ORDER: usize = 1;

/// AR(p) model: the next value is a linear function of the previous `p`
/// values plus an intercept, fit by least squares on the observed series.
///
/// Ephemeral by design; a model is created, fitted, and queried within a
/// single forecast call and never persisted.
#[derive(Debug, Clone)]
pub struct AutoRegressive {
    lag_order: usize,
    intercept: f64,
    /// Lag weights, index 0 = most recent lag.
    coefficients: Vec<f64>,
    history: Option<Vec<f64>>,
    fitted: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
}

impl AutoRegressive {
    /// Create an unfitted AR(p) model.
    pub fn new(lag_order: usize) -> Self {
        Self {
            lag_order,
            intercept: 0.0,
            coefficients: vec![],
            history: None,
            fitted: None,
            residuals: None,
        }
    }

    /// Lag order `p`.
    pub fn lag_order(&self) -> usize {
        self.lag_order
    }

    /// Fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Fitted lag weights, most recent lag first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// In-sample one-step predictions (NaN for the first `p` days).
    pub fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    /// In-sample residuals (actual - fitted; NaN for the first `p` days).
    pub fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    /// Check if the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.history.is_some()
    }

    /// Fit the model on one slot's observed series.
    pub fn fit(&mut self, series: &SlotSeries) -> Result<()> {
        let p = self.lag_order;
        if p == 0 {
            return Err(ScheduleError::InvalidParameter(
                "lag order must be at least 1".to_string(),
            ));
        }

        let values = series.to_f64();
        let n = values.len();

        // p + 1 parameters need at least p + 1 equations, so n - p >= p + 1.
        let min_len = 2 * p + 1;
        if n < min_len {
            return Err(ScheduleError::InsufficientData {
                needed: min_len,
                got: n,
            });
        }

        let mut x = Vec::with_capacity(n - p);
        let mut y = Vec::with_capacity(n - p);
        for t in p..n {
            x.push((1..=p).map(|lag| values[t - lag]).collect());
            y.push(values[t]);
        }

        let beta = lstsq_intercept(&x, &y)?;
        self.intercept = beta[0];
        self.coefficients = beta[1..].to_vec();

        let mut fitted = vec![f64::NAN; p];
        for t in p..n {
            fitted.push(self.step(&values[..t]));
        }
        let residuals = values
            .iter()
            .zip(&fitted)
            .map(|(actual, predicted)| actual - predicted)
            .collect();

        self.fitted = Some(fitted);
        self.residuals = Some(residuals);
        self.history = Some(values);

        Ok(())
    }

    /// One-step prediction from the values observed so far.
    fn step(&self, values: &[f64]) -> f64 {
        let t = values.len();
        let mut prediction = self.intercept;
        for (lag, coefficient) in self.coefficients.iter().enumerate() {
            prediction += coefficient * values[t - 1 - lag];
        }
        prediction
    }

    /// Forward-chained extrapolation over `horizon` future days.
    ///
    /// Once the observed history is exhausted, each step feeds the model's
    /// own prior predictions back in as the most recent lag inputs.
    pub fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let history = self.history.as_ref().ok_or(ScheduleError::FitRequired)?;

        let mut extended = history.clone();
        let mut predictions = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            let next = self.step(&extended);
            extended.push(next);
            predictions.push(next);
        }

        Ok(predictions)
    }
}

impl Default for AutoRegressive {
    fn default() -> Self {
        Self::new(DEFAULT_LAG_ORDER)
    }
}
