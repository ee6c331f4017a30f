//! Input validation for order streams.
//!
//! The dispatch core trusts its input: IDs are well-formed, distances
//! non-negative, arrivals within the day and non-decreasing. Upstream
//! collaborators that cannot guarantee those invariants can run the
//! stream through [`validate_orders`] first; the schedulers themselves
//! only `debug_assert!` the arrival ordering.

use std::collections::HashSet;

use crate::models::{Order, SECS_PER_DAY};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two orders share the same ID.
    DuplicateId,
    /// An order arrives earlier than its predecessor in the stream.
    OutOfOrderArrival,
    /// An order has a negative distance.
    NegativeDistance,
    /// An arrival time outside `[0, 86400)`.
    ArrivalOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Whether the stream is non-decreasing in arrival time.
pub fn is_sorted_by_arrival(orders: &[Order]) -> bool {
    orders
        .windows(2)
        .all(|pair| pair[0].arrival_secs <= pair[1].arrival_secs)
}

/// Validates an order stream against the core's input contract.
///
/// Checks:
/// 1. No duplicate order IDs
/// 2. Non-negative distances
/// 3. Arrival times within `[0, 86400)`
/// 4. Non-decreasing arrival order
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_orders(orders: &[Order]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for order in orders {
        if !ids.insert(order.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate order ID: {}", order.id),
            ));
        }

        if order.distance < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDistance,
                format!("Order '{}' has negative distance {}", order.id, order.distance),
            ));
        }

        if order.arrival_secs < 0 || order.arrival_secs >= SECS_PER_DAY {
            errors.push(ValidationError::new(
                ValidationErrorKind::ArrivalOutOfRange,
                format!(
                    "Order '{}' arrives at {} outside [0, {})",
                    order.id, order.arrival_secs, SECS_PER_DAY
                ),
            ));
        }
    }

    for pair in orders.windows(2) {
        if pair[0].arrival_secs > pair[1].arrival_secs {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfOrderArrival,
                format!(
                    "Order '{}' (t={}) arrives before its predecessor '{}' (t={})",
                    pair[1].id, pair[1].arrival_secs, pair[0].id, pair[0].arrival_secs
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
