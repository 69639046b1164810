//! Day selection against a campaign impression target.

mod selector;
mod window;

pub use selector::{select_minimal_days, Selection, SelectionOutcome, SelectorConfig};
pub use window::SchedulingWindow;
