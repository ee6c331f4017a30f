//! Working-hours filtering policy.
//!
//! Drops every order that arrives outside the drone's working interval
//! before the stream reaches the dispatch core. The time-limited
//! scheduler variants pair this stage with an in-loop finish-time check
//! inside the core itself (see `scheduler::core`).

use super::PolicyStage;
use crate::models::{DispatchWindow, Order};

/// Keeps only orders whose arrival falls inside a closed window.
#[derive(Debug, Clone)]
pub struct TimeWindowFilter {
    window: DispatchWindow,
}

impl TimeWindowFilter {
    /// Creates a filter over the given window.
    pub fn new(window: DispatchWindow) -> Self {
        Self { window }
    }

    /// The window this filter applies.
    pub fn window(&self) -> DispatchWindow {
        self.window
    }
}

impl PolicyStage for TimeWindowFilter {
    fn name(&self) -> &'static str {
        "time_window"
    }

    fn apply(&self, orders: Vec<Order>) -> Vec<Order> {
        orders
            .into_iter()
            .filter(|o| self.window.contains(o.arrival_secs))
            .collect()
    }

    fn description(&self) -> &'static str {
        "Drop orders arriving outside the working-hours window"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_excludes_out_of_window() {
        let filter = TimeWindowFilter::new(DispatchWindow::new(21_600, 79_200));
        let orders = vec![
            Order::new("WM0001", 1, 21_599),
            Order::new("WM0002", 1, 21_600),
            Order::new("WM0003", 1, 50_000),
            Order::new("WM0004", 1, 79_200),
            Order::new("WM0005", 1, 79_201),
        ];

        let kept = filter.apply(orders);
        let ids: Vec<&str> = kept.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["WM0002", "WM0003", "WM0004"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = TimeWindowFilter::new(DispatchWindow::new(0, 100));
        let orders = vec![
            Order::new("WM0001", 9, 10),
            Order::new("WM0002", 1, 10),
            Order::new("WM0003", 5, 50),
        ];
        let kept = filter.apply(orders.clone());
        assert_eq!(kept, orders);
    }

    #[test]
    fn test_filter_empty_stream() {
        let filter = TimeWindowFilter::new(DispatchWindow::new(0, 100));
        assert!(filter.apply(Vec::new()).is_empty());
    }
}
