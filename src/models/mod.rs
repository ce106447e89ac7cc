//! Data models for the contact book.
//!
//! This module contains the contact record aggregate and the entries
//! returned by upcoming birthday queries.

pub mod record;
pub mod upcoming;

pub use record::Record;
pub use upcoming::UpcomingBirthday;
