//! Random order-stream generation for tests and benchmarks.
//!
//! Generation takes any [`rand::Rng`], so property-style tests can pass
//! a seeded generator and replay the exact same stream.
//!
//! # Usage
//!
//! ```
//! use drone_dispatch::generator::{generate, GeneratorConfig};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let config = GeneratorConfig::default().with_count(50);
//! let mut rng = SmallRng::seed_from_u64(7);
//! let orders = generate(&config, &mut rng);
//! assert_eq!(orders.len(), 50);
//! ```

use rand::Rng;

use crate::models::{Order, SECS_PER_DAY};

/// Parameters for random order generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of orders to generate (at most 10000: IDs carry 4 digits).
    pub count: usize,
    /// Largest single direction leg; distances land in `[0, 2 * max_leg]`.
    pub max_leg: i64,
    /// Earliest arrival (seconds of day, inclusive).
    pub arrival_min_secs: i64,
    /// Latest arrival (seconds of day, inclusive).
    pub arrival_max_secs: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 100,
            max_leg: 20,
            arrival_min_secs: 0,
            arrival_max_secs: SECS_PER_DAY - 1,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of orders.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the largest direction leg.
    pub fn with_max_leg(mut self, max_leg: i64) -> Self {
        self.max_leg = max_leg;
        self
    }

    /// Sets the arrival time range (both bounds inclusive).
    pub fn with_arrival_range(mut self, min_secs: i64, max_secs: i64) -> Self {
        self.arrival_min_secs = min_secs;
        self.arrival_max_secs = max_secs;
        self
    }
}

/// Generates a random order stream sorted ascending by arrival time.
///
/// Arrival bounds are clamped into `[0, 86399]`; out-of-order bounds
/// collapse to the lower one. IDs are `WM0000..` assigned in arrival
/// order, so the stream always passes [`crate::validation::validate_orders`]
/// for counts up to 10000.
pub fn generate(config: &GeneratorConfig, rng: &mut impl Rng) -> Vec<Order> {
    let lo = config.arrival_min_secs.clamp(0, SECS_PER_DAY - 1);
    let hi = config.arrival_max_secs.clamp(lo, SECS_PER_DAY - 1);
    let max_leg = config.max_leg.max(0);

    let mut draws: Vec<(i64, i64)> = (0..config.count)
        .map(|_| {
            let distance = rng.random_range(0..=max_leg) + rng.random_range(0..=max_leg);
            let arrival = rng.random_range(lo..=hi);
            (arrival, distance)
        })
        .collect();
    draws.sort_by_key(|&(arrival, _)| arrival);

    draws
        .into_iter()
        .enumerate()
        .map(|(i, (arrival, distance))| Order::new(format!("WM{i:04}"), distance, arrival))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{is_sorted_by_arrival, validate_orders};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_stream_is_valid_input() {
        let config = GeneratorConfig::default().with_count(200);
        let mut rng = SmallRng::seed_from_u64(42);
        let orders = generate(&config, &mut rng);

        assert_eq!(orders.len(), 200);
        assert!(is_sorted_by_arrival(&orders));
        assert!(validate_orders(&orders).is_ok());
    }

    #[test]
    fn test_same_seed_same_stream() {
        let config = GeneratorConfig::default().with_count(50);
        let a = generate(&config, &mut SmallRng::seed_from_u64(7));
        let b = generate(&config, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_respects_bounds() {
        let config = GeneratorConfig::default()
            .with_count(100)
            .with_max_leg(3)
            .with_arrival_range(1_000, 2_000);
        let mut rng = SmallRng::seed_from_u64(1);

        for order in generate(&config, &mut rng) {
            assert!((0..=6).contains(&order.distance));
            assert!((1_000..=2_000).contains(&order.arrival_secs));
        }
    }

    #[test]
    fn test_bounds_are_clamped() {
        let config = GeneratorConfig::default()
            .with_count(10)
            .with_arrival_range(-500, SECS_PER_DAY + 500);
        let mut rng = SmallRng::seed_from_u64(3);

        for order in generate(&config, &mut rng) {
            assert!((0..SECS_PER_DAY).contains(&order.arrival_secs));
        }
    }

    #[test]
    fn test_zero_count() {
        let config = GeneratorConfig::default().with_count(0);
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(generate(&config, &mut rng).is_empty());
    }
}
