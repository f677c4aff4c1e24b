//! Lottery use cases.
//!
//! A draw is one call to the random port inside a validated range, followed
//! by classification against the configured rules. The clock stamps the draw
//! in logs but never affects the result.

use std::sync::Arc;

use lotto_domain::{DomainError, DrawRange, LotteryResult, LotteryRules};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// Container for lottery use cases.
pub struct LotteryUseCases {
    pub draw: Arc<DrawLottery>,
}

impl LotteryUseCases {
    pub fn new(draw: Arc<DrawLottery>) -> Self {
        Self { draw }
    }
}

/// Draw a lottery number use case.
pub struct DrawLottery {
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
    rules: LotteryRules,
}

impl DrawLottery {
    pub fn new(
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        rules: LotteryRules,
    ) -> Self {
        Self {
            random,
            clock,
            rules,
        }
    }

    /// Draw one number in `[min, max)` and classify it.
    ///
    /// # Returns
    /// * `Ok(LotteryResult)` - The drawn number, unmodified, and its message
    /// * `Err(LotteryError::InvalidRange)` - `min > max`; the random port is not called
    pub fn execute(&self, min: i32, max: i32) -> Result<LotteryResult, LotteryError> {
        let range = DrawRange::new(min, max)?;
        let drawn_number = self.random.gen_range(range.min(), range.max());
        let result = self.rules.classify(drawn_number);

        tracing::info!(
            drawn_at = %self.clock.now(),
            min = range.min(),
            max = range.max(),
            drawn_number,
            won = self.rules.is_winning(drawn_number),
            "Lottery drawn"
        );

        Ok(result)
    }

    /// Draw within an already validated range.
    pub fn execute_in(&self, range: DrawRange) -> Result<LotteryResult, LotteryError> {
        self.execute(range.min(), range.max())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LotteryError {
    #[error("Invalid draw range: {0}")]
    InvalidRange(#[from] DomainError),
}
