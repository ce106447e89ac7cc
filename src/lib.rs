//! Contact Book - a personal contact directory with birthday reminders.
//!
//! This library stores contacts (a name, phone numbers, and an optional
//! birthday), supports adding, editing, finding and removing them, and
//! computes which contacts have a birthday within the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones, and birthdays
//! - **models**: The contact record and upcoming birthday entries
//! - **birthdays**: Next-occurrence, weekend shift, and window calculation
//! - **directory**: The name-keyed collection owning all records
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod birthdays;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use directory::{Directory, RecordMut};
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{ConfigError, RecordError};
pub use models::{Record, UpcomingBirthday};
