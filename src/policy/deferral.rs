//! Detractor-deferral reordering policy.
//!
//! An order whose one-way flight time alone exceeds the detractor
//! threshold cannot escape a `Detractors` classification no matter how
//! favorably it is queued. Deferring such orders to the back of the
//! stream cannot lower the score and lets every other order wait less.

use super::PolicyStage;
use crate::models::Order;

/// One-way flight time (seconds) beyond which an order is guaranteed a
/// `Detractors` classification.
///
/// Numerically equal to [`crate::satisfaction::NEUTRAL_MAX_WAIT_SECS`]
/// but semantically independent: this one bounds flight time, not queue
/// wait. Keep the two constants separate.
pub const DETRACTOR_FLIGHT_THRESHOLD_SECS: i64 = 10_800;

/// Reorders the stream so detractor-guaranteed orders come last.
///
/// Partition is stable: relative order is preserved inside each group.
/// The output stream no longer ascends in arrival time, which the core's
/// head-only drain check assumes; deferred orders may therefore enter
/// the waiting set later than their true arrival. This is the intended
/// behavior of the unfair scheduler variants.
#[derive(Debug, Clone)]
pub struct DetractorDeferral {
    threshold_secs: i64,
}

impl DetractorDeferral {
    /// Creates a deferral stage with a custom flight-time threshold.
    pub fn new(threshold_secs: i64) -> Self {
        Self { threshold_secs }
    }

    /// Whether an order cannot avoid a `Detractors` classification.
    pub fn is_guaranteed_detractor(&self, order: &Order) -> bool {
        order.one_way_secs() > self.threshold_secs
    }
}

impl Default for DetractorDeferral {
    fn default() -> Self {
        Self::new(DETRACTOR_FLIGHT_THRESHOLD_SECS)
    }
}

impl PolicyStage for DetractorDeferral {
    fn name(&self) -> &'static str {
        "detractor_deferral"
    }

    fn apply(&self, orders: Vec<Order>) -> Vec<Order> {
        let (deferred, mut kept): (Vec<Order>, Vec<Order>) = orders
            .into_iter()
            .partition(|o| self.is_guaranteed_detractor(o));
        kept.extend(deferred);
        kept
    }

    fn description(&self) -> &'static str {
        "Defer guaranteed-detractor orders to the end of the stream"
    }
}
