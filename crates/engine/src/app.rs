//! Application state and composition.

use std::sync::Arc;

use lotto_domain::DrawRange;

use crate::infrastructure::{
    config::LotteryConfig,
    ports::{ClockPort, RandomPort},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the use cases and the range the home page draws from.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub home_range: DrawRange,
}

/// Container for all use cases.
pub struct UseCases {
    pub lottery: use_cases::LotteryUseCases,
}

impl App {
    /// Wire use cases onto the given ports.
    pub fn new(
        config: LotteryConfig,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let draw = Arc::new(use_cases::DrawLottery::new(random, clock, config.rules));

        Self {
            use_cases: UseCases {
                lottery: use_cases::LotteryUseCases::new(draw),
            },
            home_range: config.home_range,
        }
    }
}
