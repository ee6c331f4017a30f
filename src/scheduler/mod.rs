//! Composed dispatch schedulers.
//!
//! A [`Scheduler`] is an ordered pipeline of policy stages feeding the
//! greedy dispatch core. Four named variants compose the available
//! stages:
//!
//! | Variant | Pipeline |
//! |---------|----------|
//! | `Dynamic` | core only |
//! | `Unfair` | detractor deferral → core |
//! | `Limited` | time-window filter → core (+ in-loop window check) |
//! | `UnfairLimited` | deferral → filter → core (+ in-loop check) |
//!
//! # Usage
//!
//! ```
//! use drone_dispatch::models::Order;
//! use drone_dispatch::scheduler::{Scheduler, SchedulerConfig, SchedulerVariant};
//!
//! let config = SchedulerConfig::default().with_variant(SchedulerVariant::Unfair);
//! let scheduler = Scheduler::from_config(&config).unwrap();
//!
//! let report = scheduler.run(vec![
//!     Order::new("WM0001", 5, 0),
//!     Order::new("WM0002", 1, 0),
//! ]);
//! assert_eq!(report.sequence[0].order_id, "WM0002");
//! ```

mod core;

pub use self::core::dispatch;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{DispatchReport, DispatchWindow, Order};
use crate::policy::{
    DetractorDeferral, PolicyStage, TimeWindowFilter, DETRACTOR_FLIGHT_THRESHOLD_SECS,
};
use crate::validation;

/// Named scheduler composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerVariant {
    /// Greedy core alone.
    Dynamic,
    /// Detractor deferral, then the core.
    Unfair,
    /// Working-hours filter, then the core with the in-loop window check.
    Limited,
    /// Deferral, then the filter, then the windowed core.
    UnfairLimited,
}

/// Caller-supplied scheduler configuration.
///
/// Window bounds apply only to the `Limited` variants; the detractor
/// threshold only to the `Unfair` variants. Defaults match the
/// reference working day: 06:00–22:00, three-hour detractor ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Which composition to build.
    pub variant: SchedulerVariant,
    /// Working-hours start (seconds of day, inclusive).
    pub window_start_secs: i64,
    /// Working-hours end (seconds of day, inclusive).
    pub window_end_secs: i64,
    /// One-way flight time (seconds) beyond which an order is deferred.
    pub detractor_threshold_secs: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            variant: SchedulerVariant::Dynamic,
            window_start_secs: 6 * 3_600,
            window_end_secs: 22 * 3_600,
            detractor_threshold_secs: DETRACTOR_FLIGHT_THRESHOLD_SECS,
        }
    }
}

impl SchedulerConfig {
    /// Sets the scheduler variant.
    pub fn with_variant(mut self, variant: SchedulerVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the working-hours window.
    pub fn with_window(mut self, start_secs: i64, end_secs: i64) -> Self {
        self.window_start_secs = start_secs;
        self.window_end_secs = end_secs;
        self
    }

    /// Sets the detractor flight-time threshold.
    pub fn with_detractor_threshold(mut self, threshold_secs: i64) -> Self {
        self.detractor_threshold_secs = threshold_secs;
        self
    }
}

/// A configuration error. No dispatch takes place on error: the run is
/// rejected before the first order is examined.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Error category.
    pub kind: ConfigErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// `window_start_secs` is negative.
    NegativeWindowStart,
    /// `window_end_secs` is negative.
    NegativeWindowEnd,
    /// `window_start_secs` exceeds `window_end_secs`.
    InvertedWindow,
    /// `detractor_threshold_secs` is negative.
    NegativeDetractorThreshold,
}

impl ConfigError {
    fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

/// A dispatch scheduler: policy stages in front of the greedy core.
///
/// Immutable after construction; `run` holds no state across calls, so
/// a single scheduler can serve independent runs from multiple threads.
#[derive(Debug)]
pub struct Scheduler {
    stages: Vec<Box<dyn PolicyStage>>,
    window: Option<DispatchWindow>,
}

impl Scheduler {
    /// Creates a bare scheduler (the `Dynamic` composition).
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            window: None,
        }
    }

    /// Appends a policy stage to the pipeline.
    pub fn with_stage<S: PolicyStage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Enables the in-loop working-hours check on the core.
    pub fn with_window(mut self, window: DispatchWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Builds the composition named by `config.variant`.
    ///
    /// # Errors
    /// Rejects negative or inverted window bounds (Limited variants)
    /// and a negative detractor threshold (Unfair variants).
    pub fn from_config(config: &SchedulerConfig) -> Result<Self, ConfigError> {
        match config.variant {
            SchedulerVariant::Dynamic => Ok(Scheduler::new()),
            SchedulerVariant::Unfair => Ok(Scheduler::new().with_stage(validated_deferral(config)?)),
            SchedulerVariant::Limited => {
                let window = validated_window(config)?;
                Ok(Scheduler::new()
                    .with_stage(TimeWindowFilter::new(window))
                    .with_window(window))
            }
            SchedulerVariant::UnfairLimited => {
                let window = validated_window(config)?;
                Ok(Scheduler::new()
                    .with_stage(validated_deferral(config)?)
                    .with_stage(TimeWindowFilter::new(window))
                    .with_window(window))
            }
        }
    }

    /// Names of the composed stages, in pipeline order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Runs the pipeline over an arrival-ordered stream and returns the
    /// dispatch report.
    ///
    /// The input must be non-decreasing in arrival time; the core does
    /// not sort and release builds do not re-validate (use
    /// [`crate::validation::validate_orders`] upstream when in doubt).
    pub fn run(&self, orders: Vec<Order>) -> DispatchReport {
        debug_assert!(
            validation::is_sorted_by_arrival(&orders),
            "input stream must be non-decreasing in arrival time"
        );
        let mut stream = orders;
        for stage in &self.stages {
            stream = stage.apply(stream);
        }
        self::core::dispatch(stream, self.window.as_ref())
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn validated_deferral(config: &SchedulerConfig) -> Result<DetractorDeferral, ConfigError> {
    if config.detractor_threshold_secs < 0 {
        return Err(ConfigError::new(
            ConfigErrorKind::NegativeDetractorThreshold,
            format!(
                "Detractor threshold must be non-negative, got {}",
                config.detractor_threshold_secs
            ),
        ));
    }
    Ok(DetractorDeferral::new(config.detractor_threshold_secs))
}

fn validated_window(config: &SchedulerConfig) -> Result<DispatchWindow, ConfigError> {
    if config.window_start_secs < 0 {
        return Err(ConfigError::new(
            ConfigErrorKind::NegativeWindowStart,
            format!(
                "Window start must be non-negative, got {}",
                config.window_start_secs
            ),
        ));
    }
    if config.window_end_secs < 0 {
        return Err(ConfigError::new(
            ConfigErrorKind::NegativeWindowEnd,
            format!(
                "Window end must be non-negative, got {}",
                config.window_end_secs
            ),
        ));
    }
    if config.window_start_secs > config.window_end_secs {
        return Err(ConfigError::new(
            ConfigErrorKind::InvertedWindow,
            format!(
                "Window start {} exceeds end {}",
                config.window_start_secs, config.window_end_secs
            ),
        ));
    }
    Ok(DispatchWindow::new(
        config.window_start_secs,
        config.window_end_secs,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, distance: i64, arrival_secs: i64) -> Order {
        Order::new(id, distance, arrival_secs)
    }

    fn ids(report: &DispatchReport) -> Vec<&str> {
        report.sequence.iter().map(|d| d.order_id.as_str()).collect()
    }

    #[test]
    fn test_dynamic_has_no_stages() {
        let scheduler = Scheduler::from_config(&SchedulerConfig::default()).unwrap();
        assert!(scheduler.stage_names().is_empty());
    }

    #[test]
    fn test_variant_pipelines() {
        let config = SchedulerConfig::default();

        let unfair =
            Scheduler::from_config(&config.clone().with_variant(SchedulerVariant::Unfair))
                .unwrap();
        assert_eq!(unfair.stage_names(), ["detractor_deferral"]);

        let limited =
            Scheduler::from_config(&config.clone().with_variant(SchedulerVariant::Limited))
                .unwrap();
        assert_eq!(limited.stage_names(), ["time_window"]);

        let both =
            Scheduler::from_config(&config.with_variant(SchedulerVariant::UnfairLimited)).unwrap();
        assert_eq!(both.stage_names(), ["detractor_deferral", "time_window"]);
    }

    #[test]
    fn test_config_errors() {
        let base = SchedulerConfig::default().with_variant(SchedulerVariant::Limited);

        let err = Scheduler::from_config(&base.clone().with_window(-1, 100)).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::NegativeWindowStart);

        let err = Scheduler::from_config(&base.clone().with_window(0, -1)).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::NegativeWindowEnd);

        let err = Scheduler::from_config(&base.clone().with_window(100, 50)).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::InvertedWindow);

        let err = Scheduler::from_config(
            &base
                .with_variant(SchedulerVariant::Unfair)
                .with_detractor_threshold(-1),
        )
        .unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::NegativeDetractorThreshold);
    }

    #[test]
    fn test_window_not_validated_for_dynamic() {
        // Dynamic ignores the window entirely, so bad bounds pass.
        let config = SchedulerConfig::default().with_window(100, 50);
        assert!(Scheduler::from_config(&config).is_ok());
    }

    #[test]
    fn test_dynamic_run() {
        let scheduler = Scheduler::from_config(&SchedulerConfig::default()).unwrap();
        let report = scheduler.run(vec![order("A", 5, 0), order("B", 1, 0)]);
        assert_eq!(ids(&report), ["B", "A"]);
    }

    #[test]
    fn test_unfair_defers_long_orders() {
        let config = SchedulerConfig::default().with_variant(SchedulerVariant::Unfair);
        let scheduler = Scheduler::from_config(&config).unwrap();

        // WM0001 is detractor-guaranteed (200*60 > 10800) and arrives
        // first; unfair still flies the short ones before it.
        let report = scheduler.run(vec![
            order("WM0001", 200, 0),
            order("WM0002", 1, 100),
            order("WM0003", 2, 200),
        ]);
        assert_eq!(ids(&report), ["WM0002", "WM0003", "WM0001"]);
        assert_eq!(report.tally.detractors, 1);
        assert_eq!(report.tally.promoters, 2);
    }

    #[test]
    fn test_unfair_improves_nps_over_dynamic() {
        let orders = vec![
            order("WM0001", 200, 0),
            order("WM0002", 1, 100),
            order("WM0003", 2, 200),
        ];

        let dynamic = Scheduler::from_config(&SchedulerConfig::default()).unwrap();
        let unfair = Scheduler::from_config(
            &SchedulerConfig::default().with_variant(SchedulerVariant::Unfair),
        )
        .unwrap();

        let dynamic_nps = dynamic.run(orders.clone()).nps.unwrap();
        let unfair_nps = unfair.run(orders).nps.unwrap();
        assert!(unfair_nps > dynamic_nps);
    }

    #[test]
    fn test_limited_excludes_arrivals_outside_window() {
        let config = SchedulerConfig::default()
            .with_variant(SchedulerVariant::Limited)
            .with_window(21_600, 79_200);
        let scheduler = Scheduler::from_config(&config).unwrap();

        let report = scheduler.run(vec![
            order("WM0001", 1, 100),    // before opening
            order("WM0002", 1, 30_000), // inside
            order("WM0003", 1, 79_201), // after closing
        ]);
        assert_eq!(ids(&report), ["WM0002"]);
    }

    #[test]
    fn test_limited_drops_overrunning_dispatch() {
        // WM0002 arrives in-window but its return would pass 22:00.
        let config = SchedulerConfig::default()
            .with_variant(SchedulerVariant::Limited)
            .with_window(21_600, 79_200);
        let scheduler = Scheduler::from_config(&config).unwrap();

        let report = scheduler.run(vec![
            order("WM0001", 1, 30_000),
            order("WM0002", 600, 30_500), // round trip 72000s → overruns
        ]);
        assert_eq!(ids(&report), ["WM0001"]);
        assert_eq!(report.tally.total, 1);
    }

    #[test]
    fn test_unfair_limited_composes_both() {
        let config = SchedulerConfig::default()
            .with_variant(SchedulerVariant::UnfairLimited)
            .with_window(0, 86_399);
        let scheduler = Scheduler::from_config(&config).unwrap();

        let report = scheduler.run(vec![
            order("WM0001", 200, 0), // deferred, still fits the window
            order("WM0002", 1, 100),
        ]);
        assert_eq!(ids(&report), ["WM0002", "WM0001"]);
    }

    #[test]
    fn test_empty_input_all_variants() {
        for variant in [
            SchedulerVariant::Dynamic,
            SchedulerVariant::Unfair,
            SchedulerVariant::Limited,
            SchedulerVariant::UnfairLimited,
        ] {
            let config = SchedulerConfig::default().with_variant(variant);
            let report = Scheduler::from_config(&config).unwrap().run(Vec::new());
            assert!(report.is_empty(), "{variant:?}");
            assert_eq!(report.nps, None, "{variant:?}");
        }
    }

    #[test]
    fn test_variant_serde_names() {
        let json = serde_json::to_string(&SchedulerVariant::UnfairLimited).unwrap();
        assert_eq!(json, "\"unfair_limited\"");
        let back: SchedulerVariant = serde_json::from_str("\"dynamic\"").unwrap();
        assert_eq!(back, SchedulerVariant::Dynamic);
    }
}
