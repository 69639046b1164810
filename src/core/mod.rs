//! Core data structures for impression histories and forecasts.

mod forecast;
mod history;

pub use forecast::ForecastMatrix;
pub use history::{ImpressionHistory, SlotSeries, HISTORY_DAYS};
