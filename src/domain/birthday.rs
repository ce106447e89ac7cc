//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Textual format accepted and produced for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday date regex")
});

/// Parse a calendar date strictly from `DD.MM.YYYY` text.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDateFormat` if the text is not in
/// `DD.MM.YYYY` form or does not name a real calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_SHAPE_REGEX.is_match(raw) {
        return Err(ValidationError::InvalidDateFormat(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDateFormat(raw.to_string()))
}

/// A contact's date of birth.
///
/// Parsed strictly from `DD.MM.YYYY`; only the calendar date is kept.
/// Rendering with [`fmt::Display`] produces the same `DD.MM.YYYY` form, so
/// any accepted input renders back to itself.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("22.05.1990").unwrap();
/// assert_eq!(birthday.to_string(), "22.05.1990");
/// assert!(Birthday::new("31.04.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the text is not in
    /// `DD.MM.YYYY` form or does not name a real calendar date.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        parse_date(raw).map(Self)
    }

    /// The full date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Month of birth (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month of birth (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
