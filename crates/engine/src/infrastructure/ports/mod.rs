//! Port traits for infrastructure boundaries.
//!
//! The lottery draw depends on exactly two capabilities:
//! - Clock (current moment)
//! - Random (integer and fraction draws)
//!
//! Both are injected so tests can pin them.

mod testing;

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

pub use testing::{ClockPort, RandomPort};
