//! Bounds for a single draw

use crate::error::DomainError;

/// Half-open draw bounds `[min, max)`.
///
/// `min == max` is accepted as a degenerate range whose only possible
/// draw is `min`. `min > max` is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRange {
    min: i32,
    max: i32,
}

impl DrawRange {
    /// Range used by the home page when nothing else is configured.
    pub const DEFAULT: Self = Self { min: 0, max: 10 };

    pub fn new(min: i32, max: i32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::validation(format!(
                "draw range min {} exceeds max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// True when the range admits exactly one value.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Whether `value` falls inside `[min, max)`, treating a degenerate
    /// range as `{min}`.
    pub fn contains(&self, value: i32) -> bool {
        if self.is_degenerate() {
            value == self.min
        } else {
            (self.min..self.max).contains(&value)
        }
    }
}

impl Default for DrawRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}
