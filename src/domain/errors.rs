//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or whitespace only.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    #[error("Invalid phone number '{0}': must consist of exactly 10 digits")]
    InvalidPhoneFormat(String),

    /// The provided date is malformed or not a real calendar date.
    #[error("Invalid date format '{0}': use DD.MM.YYYY")]
    InvalidDateFormat(String),
}
