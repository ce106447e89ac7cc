//! Birthday reminder calculations.
//!
//! Determines whether a contact's birthday falls within the upcoming
//! window and on which (possibly weekend-shifted) date to congratulate.

pub mod window;

pub use window::{
    congratulation_date, next_occurrence, occurrence_in_year, shift_weekend, DEFAULT_WINDOW_DAYS,
};
