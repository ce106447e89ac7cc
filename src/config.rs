//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::domain::birthday::parse_date;
use crate::error::{ConfigError, ConfigResult};
use chrono::{Local, NaiveDate};
use std::env::{self, VarError};

/// Largest accepted upcoming-birthday window, one full (leap) year.
const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed "today" for birthday queries (default: the local current date)
    pub today: Option<NaiveDate>,

    /// Number of days ahead that count as upcoming (default: 7)
    pub window_days: u32,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_TODAY`: date to treat as today, `DD.MM.YYYY`
    /// - `BIRTHDAY_WINDOW_DAYS`: upcoming window in days, 1-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let today = match env::var("CONTACT_BOOK_TODAY") {
            Ok(val) => Some(parse_date(&val).map_err(|e| ConfigError::InvalidValue {
                var: "CONTACT_BOOK_TODAY".to_string(),
                reason: e.to_string(),
            })?),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_TODAY".to_string(),
                    reason: "Must be valid Unicode".to_string(),
                })
            }
        };

        let window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if !(1..=MAX_WINDOW_DAYS).contains(&window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            today,
            window_days,
            log_level,
        })
    }

    /// The date birthday queries should treat as today.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(VarError::NotPresent) => Ok(default),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid Unicode".to_string(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            today: None,
            window_days: DEFAULT_WINDOW_DAYS,
            log_level: "info".to_string(),
        }
    }
}
