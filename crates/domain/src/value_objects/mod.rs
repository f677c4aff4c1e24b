//! Value objects for lottery draws.

mod draw_range;
mod lottery_rules;

pub use draw_range::DrawRange;
pub use lottery_rules::LotteryRules;
