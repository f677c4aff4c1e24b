//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of pseudo-random numbers.
///
/// Implementations must not panic on degenerate arguments; each method
/// documents what it returns instead.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Non-negative integer in `[0, i32::MAX)`.
    fn next_int(&self) -> i32;

    /// Integer in `[0, max)`. Returns `0` when `max <= 0`.
    fn next_below(&self, max: i32) -> i32;

    /// Integer in `[min, max)`. Returns `min` when `max <= min`.
    fn gen_range(&self, min: i32, max: i32) -> i32;

    /// Fraction in `[0, 1)`.
    fn next_fraction(&self) -> f64;
}
