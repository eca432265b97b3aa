//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is read if present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::UPCOMING_WINDOW_DAYS;
use std::env;

/// Largest accepted upcoming-birthday window, in days.
const MAX_UPCOMING_DAYS: u32 = 365;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level / `EnvFilter` directive (default: "error")
    pub log_level: String,

    /// Prompt printed before each input line (default: "Enter a command: ")
    pub prompt: String,

    /// Length of the upcoming-birthday window in days (default: 7)
    pub upcoming_days: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ASSISTANT_PROMPT`: Input prompt (default: "Enter a command: ")
    /// - `UPCOMING_BIRTHDAYS_DAYS`: Birthday window, 1-365 (default: 7)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);
        let upcoming_days = Self::parse_env_u32("UPCOMING_BIRTHDAYS_DAYS", defaults.upcoming_days)?;

        if upcoming_days == 0 || upcoming_days > MAX_UPCOMING_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAYS_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_UPCOMING_DAYS),
            });
        }

        Ok(Config {
            log_level,
            prompt,
            upcoming_days,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: "Enter a command: ".to_string(),
            upcoming_days: UPCOMING_WINDOW_DAYS,
        }
    }
}
