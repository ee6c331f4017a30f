//! Dispatch policies: pure stream transforms applied before the core.
//!
//! Each policy stage takes the incoming order stream and returns a new
//! stream; stages never share state and never touch the dispatch core's
//! internals. The composed schedulers in [`crate::scheduler`] chain zero
//! or more stages in front of the greedy core.
//!
//! # Usage
//!
//! ```
//! use drone_dispatch::models::Order;
//! use drone_dispatch::policy::{DetractorDeferral, PolicyStage};
//!
//! let stage = DetractorDeferral::default();
//! let stream = vec![Order::new("WM0001", 200, 0), Order::new("WM0002", 1, 10)];
//! let reordered = stage.apply(stream);
//! assert_eq!(reordered[0].id, "WM0002");
//! ```

mod deferral;
mod time_window;

pub use deferral::{DetractorDeferral, DETRACTOR_FLIGHT_THRESHOLD_SECS};
pub use time_window::TimeWindowFilter;

use crate::models::Order;
use std::fmt::Debug;

/// A pre-dispatch transform over the order stream.
///
/// Implementations must be pure with respect to the stream: the output
/// depends only on the input orders and the stage's own configuration.
pub trait PolicyStage: Debug {
    /// Stage name (e.g. `"time_window"`).
    fn name(&self) -> &'static str;

    /// Transforms the order stream, consuming the input.
    fn apply(&self, orders: Vec<Order>) -> Vec<Order>;

    /// Stage description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
