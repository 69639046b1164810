//! Error types for the slotcast library.

use thiserror::Error;

/// Result type alias for forecasting and scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that can occur while forecasting impressions or selecting days.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// History does not contain the required number of daily observations.
    #[error("invalid input shape: need exactly {expected} days of history, got {got}")]
    InvalidInputShape { expected: usize, got: usize },

    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Insufficient observations for the requested model order.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Least-squares fit could not be computed.
    #[error("degenerate model fit: {0}")]
    DegenerateFit(String),

    /// Slot index out of bounds.
    #[error("slot index out of bounds: {index} (slots: {slots})")]
    SlotOutOfBounds { index: usize, slots: usize },

    /// Day index out of bounds.
    #[error("day index out of bounds: {index} (days: {days})")]
    DayOutOfBounds { index: usize, days: usize },

    /// Subset search stopped at the configured budget.
    #[error("search budget exceeded after {explored} subsets")]
    SearchBudgetExceeded { explored: u64 },
}
