//! Use cases - user story orchestration over injected ports.

pub mod lottery;

pub use lottery::{DrawLottery, LotteryError, LotteryUseCases};
