//! Domain entities.

mod lottery_result;

pub use lottery_result::LotteryResult;
