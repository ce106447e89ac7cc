//! The contact directory.
//!
//! A [`Directory`] owns every [`Record`] it holds, keyed by contact name.
//! Records are built independently and moved in with
//! [`Directory::add_record`]; deleting a name drops its record.

use crate::birthdays::{self, DEFAULT_WINDOW_DAYS};
use crate::domain::ValidationError;
use crate::error::RecordResult;
use crate::models::{Record, UpcomingBirthday};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

/// A name-keyed collection of contact records.
///
/// Iteration follows insertion order. Replacing a record under an existing
/// name keeps that name's original position.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, returning any record it replaced.
    ///
    /// A second record with the same name fully replaces the first; the two
    /// are never merged.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().as_str().to_string();
        let replaced = self.records.insert(name.clone(), record);

        if replaced.is_some() {
            tracing::debug!(contact = %name, "Replaced existing record");
        } else {
            tracing::debug!(contact = %name, "Added record");
            self.order.push(name);
        }
        replaced
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for editing.
    ///
    /// The returned handle allows phone and birthday changes but never
    /// replacing the record, so the stored name always matches its key.
    pub fn find_mut(&mut self, name: &str) -> Option<RecordMut<'_>> {
        self.records.get_mut(name).map(|record| RecordMut { record })
    }

    /// Remove the record for `name`, reporting whether one was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_none() {
            tracing::info!(contact = %name, "No record to delete");
            return false;
        }

        self.order.retain(|n| n != name);
        tracing::info!(contact = %name, "Deleted record");
        true
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Contacts to congratulate within the next 7 days of `today`.
    ///
    /// See [`Directory::upcoming_birthdays_within`].
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts to congratulate within the next `window_days` of `today`.
    ///
    /// Each birthday's next occurrence is moved off weekends to the
    /// following Monday, then kept when it is 1 to `window_days` days
    /// away. Records without a birthday are skipped. Results follow
    /// insertion order.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                birthdays::congratulation_date(today, birthday, window_days)
                    .map(|date| UpcomingBirthday::new(record.name().as_str(), date))
            })
            .collect();

        tracing::info!(
            today = %today,
            window_days,
            contacts = self.len(),
            upcoming = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

/// Mutable access to a record stored in a [`Directory`].
///
/// Reads go through `Deref<Target = Record>`. Only field-level edits are
/// forwarded; there is no way to swap the whole record or its name.
#[derive(Debug)]
pub struct RecordMut<'a> {
    record: &'a mut Record,
}

impl RecordMut<'_> {
    /// See [`Record::add_phone`].
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.record.add_phone(phone)
    }

    /// See [`Record::remove_phone`].
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        self.record.remove_phone(phone)
    }

    /// See [`Record::edit_phone`].
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        self.record.edit_phone(old, new)
    }

    /// See [`Record::add_birthday`].
    pub fn add_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        self.record.add_birthday(birthday)
    }
}

impl Deref for RecordMut<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        &*self.record
    }
}

impl fmt::Display for RecordMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.record, f)
    }
}
