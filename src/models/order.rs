//! Delivery order model.
//!
//! An order is an immutable value record: an opaque ID, a Manhattan
//! distance in abstract units, and an arrival instant in seconds of
//! day. Orders are constructed by an upstream collaborator (see
//! `text::parse_order`) and trusted by the scheduling core.
//!
//! # Time Representation
//! All times are in seconds relative to midnight (t=0). There is no
//! date component; a run covers at most one simulated day.

use serde::{Deserialize, Serialize};

/// One-way flight time per distance unit (seconds).
pub const SECS_PER_DISTANCE_UNIT: i64 = 60;

/// Seconds in a simulated day. Arrival times fall in `[0, SECS_PER_DAY)`.
pub const SECS_PER_DAY: i64 = 86_400;

/// A delivery order awaiting dispatch.
///
/// The drone carries exactly one order at a time and must complete the
/// round trip (out and back) before becoming available again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier (e.g. `WM0001`). Opaque to the scheduler.
    pub id: String,
    /// Manhattan distance to the delivery point (units, non-negative).
    pub distance: i64,
    /// Time the order was placed (seconds of day, `[0, 86400)`).
    pub arrival_secs: i64,
}

impl Order {
    /// Creates a new order.
    pub fn new(id: impl Into<String>, distance: i64, arrival_secs: i64) -> Self {
        Self {
            id: id.into(),
            distance,
            arrival_secs,
        }
    }

    /// One-way flight time: `distance * 60` seconds.
    #[inline]
    pub fn one_way_secs(&self) -> i64 {
        self.distance * SECS_PER_DISTANCE_UNIT
    }

    /// Round-trip flight time: out and back.
    #[inline]
    pub fn round_trip_secs(&self) -> i64 {
        2 * self.one_way_secs()
    }
}
