//! Greedy shortest-distance-first dispatch core.
//!
//! # Algorithm
//!
//! 1. Seed the waiting set: among the orders sharing the earliest
//!    arrival, take the shortest; its arrival becomes the initial
//!    availability instant.
//! 2. Repeatedly dispatch the shortest waiting order. The drone departs
//!    the moment it returned from the previous trip and is busy for the
//!    full round trip.
//! 3. After each dispatch, drain every pending order that arrived while
//!    the drone was flying into the waiting set.
//! 4. When the waiting set runs dry but orders are still pending (an
//!    idle gap in the stream), re-seed from the remaining stream.
//!
//! Dispatching the shortest waiting order minimizes how long everyone
//! else queues behind it; the seed rule exists because a streaming
//! consumer never knows when the next order will arrive, so a lone
//! arrival must be flown immediately.
//!
//! # Input contract
//!
//! The stream is expected in non-decreasing arrival order; the drain
//! step peeks only at the head of the pending stream. The detractor
//! deferral policy deliberately feeds this core a reordered stream, so
//! deferred orders can enter the waiting set well after their true
//! arrival instant. That interaction is intended, not corrected here.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::models::{Dispatch, DispatchReport, DispatchWindow, Order, SatisfactionTally};
use crate::satisfaction;

/// Waiting-set entry: min-ordered by distance, then by insertion
/// sequence so that equal distances dispatch in arrival order.
#[derive(Debug, Clone)]
struct WaitingOrder {
    seq: u64,
    order: Order,
}

impl PartialEq for WaitingOrder {
    fn eq(&self, other: &Self) -> bool {
        self.order.distance == other.order.distance && self.seq == other.seq
    }
}

impl Eq for WaitingOrder {}

impl Ord for WaitingOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.order.distance, self.seq).cmp(&(other.order.distance, other.seq))
    }
}

impl PartialOrd for WaitingOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mutable state of one dispatch run. Created by [`dispatch`] and
/// discarded once the report is built; nothing survives across runs.
#[derive(Debug)]
struct DispatchCursor {
    /// Arrived, not-yet-dispatched orders, shortest first.
    waiting: BinaryHeap<Reverse<WaitingOrder>>,
    /// Orders that have not yet arrived in the simulation.
    pending: VecDeque<Order>,
    /// Monotone insertion counter for deterministic tie-breaks.
    next_seq: u64,
    /// Instant the drone next becomes available.
    finish_secs: i64,
    sequence: Vec<Dispatch>,
    tally: SatisfactionTally,
}

impl DispatchCursor {
    fn new(orders: Vec<Order>) -> Self {
        Self {
            waiting: BinaryHeap::new(),
            pending: VecDeque::from(orders),
            next_seq: 0,
            finish_secs: 0,
            sequence: Vec::new(),
            tally: SatisfactionTally::default(),
        }
    }

    fn push_waiting(&mut self, order: Order) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.waiting.push(Reverse(WaitingOrder { seq, order }));
    }

    fn pop_waiting(&mut self) -> Option<Order> {
        self.waiting.pop().map(|Reverse(w)| w.order)
    }

    /// Seeds the waiting set from the pending stream.
    ///
    /// Among the contiguous prefix of orders sharing the earliest
    /// arrival, the shortest one (first of equal distances) moves into
    /// the waiting set; the rest keep their place at the front of the
    /// stream. The seed's arrival becomes the new availability instant.
    fn seed(&mut self) {
        let first_arrival = match self.pending.front() {
            Some(order) => order.arrival_secs,
            None => return,
        };

        let mut best = 0;
        let mut best_distance = self.pending[0].distance;
        for (i, order) in self.pending.iter().enumerate().skip(1) {
            if order.arrival_secs != first_arrival {
                break;
            }
            if order.distance < best_distance {
                best = i;
                best_distance = order.distance;
            }
        }

        if let Some(order) = self.pending.remove(best) {
            self.finish_secs = order.arrival_secs;
            self.push_waiting(order);
        }
    }

    /// Moves every pending order that arrived while the drone was busy
    /// into the waiting set. Head-only check (see module docs).
    fn drain_arrived(&mut self) {
        while self
            .pending
            .front()
            .is_some_and(|o| o.arrival_secs <= self.finish_secs)
        {
            if let Some(order) = self.pending.pop_front() {
                self.push_waiting(order);
            }
        }
    }
}

/// Runs the greedy core over a fully transformed order stream.
///
/// With `window` set, any dispatch whose return instant falls outside
/// the window is discarded outright: not tallied, not recorded, not
/// requeued. The availability instant keeps the out-of-window value
/// until the idle-gap re-seed fires — preserved reference behavior,
/// even though it can distort the timing of subsequent dispatches.
///
/// An empty stream yields an empty report with an undefined NPS.
pub fn dispatch(orders: Vec<Order>, window: Option<&DispatchWindow>) -> DispatchReport {
    let mut cursor = DispatchCursor::new(orders);
    if cursor.pending.is_empty() {
        return DispatchReport::default();
    }
    cursor.seed();

    while let Some(current) = cursor.pop_waiting() {
        let departure_secs = cursor.finish_secs;
        let one_way_secs = current.one_way_secs();
        cursor.finish_secs = departure_secs + current.round_trip_secs();

        if let Some(window) = window {
            if !window.contains(cursor.finish_secs) {
                // Out-of-window return: the order is lost. A longer
                // waiting order might still fit, so only an empty
                // waiting set triggers recovery via re-seeding.
                if cursor.waiting.is_empty() && !cursor.pending.is_empty() {
                    cursor.seed();
                }
                continue;
            }
        }

        let wait_secs = departure_secs + one_way_secs - current.arrival_secs;
        cursor.tally.record(satisfaction::classify(wait_secs));
        cursor.sequence.push(Dispatch::new(current.id, departure_secs));

        cursor.drain_arrived();
        if cursor.waiting.is_empty() && !cursor.pending.is_empty() {
            cursor.seed();
        }
    }

    DispatchReport::new(cursor.sequence, cursor.tally)
}
