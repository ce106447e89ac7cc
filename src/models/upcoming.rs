//! Upcoming birthday entries produced by a directory query.

use crate::domain::birthday::DATE_FORMAT;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A contact to congratulate and the date to do it on.
///
/// Serializes as `{"name": "...", "congratulation_date": "DD.MM.YYYY"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Day to congratulate, after any weekend shift
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

impl UpcomingBirthday {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, congratulation_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            congratulation_date,
        }
    }

    /// The congratulation date rendered as `DD.MM.YYYY`.
    pub fn congratulation_date_text(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}
