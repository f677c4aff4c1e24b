//! Engine configuration

use std::env;

use anyhow::{Context, Result};
use lotto_domain::{DrawRange, LotteryRules};

/// Engine configuration loaded from environment
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Interface to bind
    pub server_host: String,
    /// HTTP port
    pub server_port: u16,
    /// CORS allowed origins (comma-separated, or "*" for any). Unset disables CORS.
    pub cors_allowed_origins: Option<String>,
    /// Lottery configuration
    pub lottery: LotteryConfig,
}

/// Lottery rules and the range drawn by the home page
#[derive(Debug, Clone)]
pub struct LotteryConfig {
    pub home_range: DrawRange,
    pub rules: LotteryRules,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            home_range: DrawRange::default(),
            rules: LotteryRules::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let server_port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("SERVER_PORT must be a valid port number, got {raw:?}"))?,
            None => 3000,
        };

        let min = parse_i32(var("LOTTO_MIN"), "LOTTO_MIN", DrawRange::DEFAULT.min())?;
        let max = parse_i32(var("LOTTO_MAX"), "LOTTO_MAX", DrawRange::DEFAULT.max())?;
        let home_range =
            DrawRange::new(min, max).context("LOTTO_MIN must not exceed LOTTO_MAX")?;

        let rules = LotteryRules::new(
            parse_i32(
                var("LOTTO_WINNING_NUMBER"),
                "LOTTO_WINNING_NUMBER",
                LotteryRules::DEFAULT_WINNING_NUMBER,
            )?,
            var("LOTTO_WIN_MESSAGE")
                .unwrap_or_else(|| LotteryRules::DEFAULT_WIN_MESSAGE.to_string()),
            var("LOTTO_LOSE_MESSAGE")
                .unwrap_or_else(|| LotteryRules::DEFAULT_LOSE_MESSAGE.to_string()),
        )
        .context("invalid lottery messages")?;

        if !home_range.contains(rules.winning_number()) {
            tracing::warn!(
                winning_number = rules.winning_number(),
                min = home_range.min(),
                max = home_range.max(),
                "Winning number lies outside the home range; the home page can never win"
            );
        }

        Ok(Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
            lottery: LotteryConfig { home_range, rules },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_i32(raw: Option<String>, key: &str, default: i32) -> Result<i32> {
    match raw {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{key} must be an integer, got {raw:?}")),
        None => Ok(default),
    }
}
