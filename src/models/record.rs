//! Record model representing a single contact in the directory.

use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name, an ordered list of phones, and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and may
/// repeat. Once a birthday is set it cannot be replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the contact, also its key in a directory
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,

    /// Date of birth, if known
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// All phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it to the end of the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if `phone` is not ten
    /// digits; the record is left unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        if removed > 0 {
            tracing::debug!(contact = %self.name, phone, removed, "Removed phone");
        }
        removed
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything changes. Returns how many phones
    /// were replaced; zero means `old` was not found and the list is
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if `new` is not ten
    /// digits.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let replacement = Phone::new(new)?;

        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            replaced += 1;
        }

        if replaced == 0 {
            tracing::debug!(contact = %self.name, old, "No phone to edit");
        } else {
            tracing::debug!(contact = %self.name, old, new, replaced, "Edited phone");
        }
        Ok(replaced)
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and set the birthday if none is set yet.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::BirthdayAlreadySet` if a birthday exists,
    /// whatever `birthday` contains. Otherwise returns a validation error
    /// if `birthday` is not a valid `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        if self.birthday.is_some() {
            return Err(RecordError::BirthdayAlreadySet {
                name: self.name.to_string(),
            });
        }

        let birthday = Birthday::new(birthday)?;
        tracing::debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "none"),
        }
    }
}
