//! Customer satisfaction classification.
//!
//! Maps a delivery wait to an NPS category. The wait is measured from
//! the moment the order was placed to the moment the drone reaches the
//! customer (departure plus one-way flight), not to the drone's return.
//!
//! | Wait | Category |
//! |------|----------|
//! | `< 0` | Invalid |
//! | `0..=3600` | Promoters |
//! | `3601..=10800` | Neutral |
//! | `> 10800` | Detractors |

use serde::{Deserialize, Serialize};

/// Longest wait (seconds) still classified as `Promoters`: one hour.
pub const PROMOTER_MAX_WAIT_SECS: i64 = 3_600;

/// Longest wait (seconds) still classified as `Neutral`: three hours.
pub const NEUTRAL_MAX_WAIT_SECS: i64 = 10_800;

/// NPS category of a single delivery.
///
/// `Invalid` marks a negative wait (inconsistent input clocks); it is
/// counted toward the tally total but never toward the NPS numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Satisfaction {
    /// Negative wait — inconsistent timestamps in the input.
    Invalid,
    /// Waited at most one hour.
    Promoters,
    /// Waited over one hour, up to three hours.
    Neutral,
    /// Waited over three hours.
    Detractors,
}

/// Classifies a delivery wait in seconds.
pub fn classify(wait_secs: i64) -> Satisfaction {
    if wait_secs < 0 {
        Satisfaction::Invalid
    } else if wait_secs <= PROMOTER_MAX_WAIT_SECS {
        Satisfaction::Promoters
    } else if wait_secs <= NEUTRAL_MAX_WAIT_SECS {
        Satisfaction::Neutral
    } else {
        Satisfaction::Detractors
    }
}
