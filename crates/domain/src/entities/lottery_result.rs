//! Outcome of a single lottery draw.

use serde::{Deserialize, Serialize};

/// The drawn number and the message it was classified with.
///
/// Created once per draw and never mutated. Two results are equal when both
/// fields are equal; there is no identity beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryResult {
    drawn_number: i32,
    message: String,
}

impl LotteryResult {
    pub fn new(drawn_number: i32, message: impl Into<String>) -> Self {
        Self {
            drawn_number,
            message: message.into(),
        }
    }

    pub fn drawn_number(&self) -> i32 {
        self.drawn_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
