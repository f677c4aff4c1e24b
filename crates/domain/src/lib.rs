//! Lotto domain types.
//!
//! Pure values with no I/O and no randomness. Draws happen in the engine
//! through injected ports; this crate only validates ranges and classifies
//! drawn numbers.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::LotteryResult;
pub use error::DomainError;
pub use value_objects::{DrawRange, LotteryRules};
