//! Clock and random implementations.

use crate::infrastructure::ports::{ClockPort, RandomPort};
use chrono::{DateTime, Utc};
use rand::Rng;

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses the thread-local RNG.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn next_int(&self) -> i32 {
        rand::thread_rng().gen_range(0..i32::MAX)
    }

    fn next_below(&self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..max)
    }

    fn gen_range(&self, min: i32, max: i32) -> i32 {
        // rand panics on an empty range
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..max)
    }

    fn next_fraction(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed random for testing. Every integer draw returns the wrapped value.
#[cfg(test)]
pub struct FixedRandom(pub i32);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn next_int(&self) -> i32 {
        self.0
    }

    fn next_below(&self, _max: i32) -> i32 {
        self.0
    }

    fn gen_range(&self, _min: i32, _max: i32) -> i32 {
        self.0
    }

    fn next_fraction(&self) -> f64 {
        0.0
    }
}
