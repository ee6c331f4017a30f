//! Dispatch report (run result) model.
//!
//! A report is the complete output of one scheduling run: the dispatch
//! sequence with departure times, the satisfaction tally, and the NPS
//! proxy score derived from it.

use serde::{Deserialize, Serialize};

use crate::satisfaction::Satisfaction;

/// A single dispatch: the drone departed with an order at a given instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Dispatched order ID.
    pub order_id: String,
    /// Departure time (seconds of day).
    pub departure_secs: i64,
}

impl Dispatch {
    /// Creates a new dispatch entry.
    pub fn new(order_id: impl Into<String>, departure_secs: i64) -> Self {
        Self {
            order_id: order_id.into(),
            departure_secs,
        }
    }
}

/// Counts of classified deliveries.
///
/// `total` includes `Invalid` classifications; the other three counters
/// partition only the valid deliveries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfactionTally {
    /// Deliveries counted, including invalid ones.
    pub total: usize,
    /// Waits of at most one hour.
    pub promoters: usize,
    /// Waits over one hour, up to three hours.
    pub neutral: usize,
    /// Waits over three hours.
    pub detractors: usize,
}

impl SatisfactionTally {
    /// Records one classified delivery.
    ///
    /// `Invalid` bumps `total` only: it is excluded from the NPS
    /// numerator but still dilutes the denominator.
    pub fn record(&mut self, satisfaction: Satisfaction) {
        self.total += 1;
        match satisfaction {
            Satisfaction::Promoters => self.promoters += 1,
            Satisfaction::Neutral => self.neutral += 1,
            Satisfaction::Detractors => self.detractors += 1,
            Satisfaction::Invalid => {}
        }
    }

    /// NPS proxy: `(promoters - detractors) / total * 100`.
    ///
    /// Returns `None` when no deliveries were counted — the score is
    /// undefined, never reported as zero.
    pub fn nps(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some((self.promoters as f64 - self.detractors as f64) / self.total as f64 * 100.0)
    }
}

/// Result of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchReport {
    /// Dispatches in departure order.
    pub sequence: Vec<Dispatch>,
    /// Satisfaction counts across all dispatched orders.
    pub tally: SatisfactionTally,
    /// NPS proxy score in `[-100, 100]`, or `None` for an empty run.
    pub nps: Option<f64>,
}

impl DispatchReport {
    /// Builds a report from a finished sequence and tally.
    pub fn new(sequence: Vec<Dispatch>, tally: SatisfactionTally) -> Self {
        let nps = tally.nps();
        Self {
            sequence,
            tally,
            nps,
        }
    }

    /// Whether the run dispatched anything.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of dispatched orders.
    pub fn dispatch_count(&self) -> usize {
        self.sequence.len()
    }
}
