//! Win/lose classification of drawn numbers

use crate::entities::LotteryResult;
use crate::error::DomainError;

/// Business rules for classifying a draw.
///
/// Exactly one number wins. Everything else, including numbers outside the
/// requested range, gets the lose message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotteryRules {
    winning_number: i32,
    win_message: String,
    lose_message: String,
}

impl LotteryRules {
    pub const DEFAULT_WINNING_NUMBER: i32 = 9;
    pub const DEFAULT_WIN_MESSAGE: &'static str = "congratulations, you won";
    pub const DEFAULT_LOSE_MESSAGE: &'static str = "try again";

    /// Build rules, rejecting blank messages.
    pub fn new(
        winning_number: i32,
        win_message: impl Into<String>,
        lose_message: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let win_message = win_message.into();
        let lose_message = lose_message.into();

        if win_message.trim().is_empty() {
            return Err(DomainError::constraint("win message cannot be empty"));
        }
        if lose_message.trim().is_empty() {
            return Err(DomainError::constraint("lose message cannot be empty"));
        }

        Ok(Self {
            winning_number,
            win_message,
            lose_message,
        })
    }

    pub fn winning_number(&self) -> i32 {
        self.winning_number
    }

    pub fn win_message(&self) -> &str {
        &self.win_message
    }

    pub fn lose_message(&self) -> &str {
        &self.lose_message
    }

    pub fn is_winning(&self, drawn_number: i32) -> bool {
        drawn_number == self.winning_number
    }

    /// Map a drawn number to its result. The number is carried through
    /// unmodified.
    pub fn classify(&self, drawn_number: i32) -> LotteryResult {
        let message = if self.is_winning(drawn_number) {
            &self.win_message
        } else {
            &self.lose_message
        };
        LotteryResult::new(drawn_number, message.as_str())
    }
}

impl Default for LotteryRules {
    fn default() -> Self {
        Self {
            winning_number: Self::DEFAULT_WINNING_NUMBER,
            win_message: Self::DEFAULT_WIN_MESSAGE.to_string(),
            lose_message: Self::DEFAULT_LOSE_MESSAGE.to_string(),
        }
    }
}
