//! Single-drone delivery dispatch simulation.
//!
//! Replays a day's stream of delivery orders through a greedy
//! shortest-distance-first scheduler and scores the outcome with a
//! Net-Promoter-Score proxy. Policy stages — a working-hours filter and
//! a detractor-deferral reordering — compose with the core into four
//! named scheduler variants.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Order`, `Dispatch`, `DispatchReport`,
//!   `SatisfactionTally`, `DispatchWindow`
//! - **`satisfaction`**: Wait-time classification and NPS thresholds
//! - **`policy`**: Pre-dispatch stream transforms (`TimeWindowFilter`,
//!   `DetractorDeferral`)
//! - **`scheduler`**: The greedy core and the composed variants
//! - **`validation`**: Input integrity checks (arrival order, duplicate IDs)
//! - **`text`**: Wire-format parsing (`WM0001 N5E10 06:00:00`) and
//!   result formatting
//! - **`generator`**: Seedable random order streams for testing
//!
//! # Example
//!
//! ```
//! use drone_dispatch::scheduler::{Scheduler, SchedulerConfig, SchedulerVariant};
//! use drone_dispatch::text;
//!
//! let orders = text::parse_orders([
//!     "WM0001 N3E2 05:11:50",
//!     "WM0002 S1W1 05:11:50",
//! ]).unwrap();
//!
//! let config = SchedulerConfig::default().with_variant(SchedulerVariant::Dynamic);
//! let report = Scheduler::from_config(&config).unwrap().run(orders);
//!
//! assert_eq!(report.sequence[0].order_id, "WM0002");
//! assert_eq!(report.tally.promoters, 2);
//! ```

pub mod generator;
pub mod models;
pub mod policy;
pub mod satisfaction;
pub mod scheduler;
pub mod text;
pub mod validation;
