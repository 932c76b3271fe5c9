//! Application configuration loaded from the environment.

use anyhow::{Context, Result};
use std::env;

/// Runtime configuration for the bot process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Telegram Bot API access token.
    pub telegram_token: String,
    /// Emit structured JSON traces instead of plain log output.
    pub telemetry_enabled: bool,
    /// Access token for the telemetry sink, if one is configured.
    pub telemetry_token: Option<String>,
}

impl AppConfig {
    /// Reads configuration from environment variables.
    ///
    /// `TELEGRAM_BOT_TOKEN` is required; `TELEMETRY_ENABLED` and
    /// `TELEMETRY_TOKEN` are optional.
    pub fn from_env() -> Result<Self> {
        let telegram_token =
            env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;

        let telemetry_enabled = env::var("TELEMETRY_ENABLED")
            .map(|value| parse_bool_flag(&value))
            .unwrap_or(false);

        let telemetry_token = env::var("TELEMETRY_TOKEN").ok();

        Ok(Self {
            telegram_token,
            telemetry_enabled,
            telemetry_token,
        })
    }
}

/// Interprets common truthy spellings of a boolean environment flag.
fn parse_bool_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
