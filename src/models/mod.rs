//! Forecasting models.

mod ar;
mod lstsq;

pub use ar::{AutoRegressive, DEFAULT_LAG_ORDER};
