//! Dispatch domain models.
//!
//! Core data types for the drone-delivery simulation: the order record
//! consumed by the schedulers, the dispatch report they produce, and the
//! working-hours window used by the time-limited variants.

mod order;
mod report;
mod window;

pub use order::{Order, SECS_PER_DAY, SECS_PER_DISTANCE_UNIT};
pub use report::{Dispatch, DispatchReport, SatisfactionTally};
pub use window::DispatchWindow;
