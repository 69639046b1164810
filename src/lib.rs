//! # slotcast
//!
//! Scheduling support for in-world ad slots: forecasts future daily
//! impression counts per slot with an autoregressive model, then picks the
//! fewest additional days whose forecasted impressions close the gap
//! between a campaign target and two already-fixed anchor days.
//!
//! Data flows one way: an [`ImpressionHistory`](crate::core::ImpressionHistory)
//! goes through the forecast engine into a
//! [`ForecastMatrix`](crate::core::ForecastMatrix), and one slot's forecast
//! series plus a target goes through the day selector into a
//! [`SelectionOutcome`](crate::scheduling::SelectionOutcome). Both components
//! are pure, synchronous functions of their inputs.
//!
//! Data acquisition, raw-export parsing, creative classification, and
//! persistence are external collaborators; this crate only consumes a clean
//! days-by-slots matrix of non-negative integers.

pub mod core;
pub mod engine;
pub mod error;
pub mod models;
pub mod planner;
pub mod scheduling;

pub use error::{Result, ScheduleError};

pub mod prelude {
    pub use crate::core::{ForecastMatrix, ImpressionHistory, SlotSeries, HISTORY_DAYS};
    pub use crate::engine::{forecast, ForecastConfig};
    pub use crate::error::{Result, ScheduleError};
    pub use crate::models::AutoRegressive;
    pub use crate::planner::{plan_slot, PlanRequest, SlotPlan};
    pub use crate::scheduling::{
        select_minimal_days, SchedulingWindow, Selection, SelectionOutcome, SelectorConfig,
    };
}
