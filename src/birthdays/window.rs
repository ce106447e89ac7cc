//! Upcoming birthday window calculation.
//!
//! All functions here are pure: they take "today" explicitly so results
//! are reproducible and never depend on the system clock.

use crate::domain::Birthday;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Default number of days ahead that count as "upcoming".
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// The birthday's month/day placed in `year`.
///
/// 29 February falls back to 28 February in non-leap years. Returns `None`
/// only when `year` is outside the range chrono can represent.
pub fn occurrence_in_year(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// The next occurrence of the birthday on or after `today`.
///
/// If this year's occurrence has already passed, next year's is used.
pub fn next_occurrence(today: NaiveDate, birthday: &Birthday) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday forward to the following Monday.
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// The date to congratulate on, if it lands within the next `window_days`.
///
/// The weekend shift is applied first and the window is checked against
/// the shifted date: `1 <= days_until <= window_days`. An occurrence on
/// `today` itself is excluded unless a weekend shift moves it forward.
pub fn congratulation_date(
    today: NaiveDate,
    birthday: &Birthday,
    window_days: u32,
) -> Option<NaiveDate> {
    let shifted = shift_weekend(next_occurrence(today, birthday)?);
    let days_until = (shifted - today).num_days();

    tracing::trace!(
        birthday = %birthday,
        congratulation_date = %shifted,
        days_until,
        "Evaluated birthday occurrence"
    );

    (1..=i64::from(window_days))
        .contains(&days_until)
        .then_some(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn birthday(raw: &str) -> Birthday {
        Birthday::new(raw).unwrap()
    }

    // Monday
    fn today() -> NaiveDate {
        date(2024, 5, 20)
    }

    #[test]
    fn test_next_occurrence_this_year() {
        assert_eq!(
            next_occurrence(today(), &birthday("22.05.1990")),
            Some(date(2024, 5, 22))
        );
    }

    #[test]
    fn test_next_occurrence_today_is_this_year() {
        assert_eq!(
            next_occurrence(today(), &birthday("20.05.1990")),
            Some(date(2024, 5, 20))
        );
    }

    #[test]
    fn test_next_occurrence_passed_rolls_to_next_year() {
        assert_eq!(
            next_occurrence(today(), &birthday("19.05.1990")),
            Some(date(2025, 5, 19))
        );
    }

    #[test]
    fn test_leap_day_in_non_leap_year() {
        let leap = birthday("29.02.2000");
        assert_eq!(occurrence_in_year(&leap, 2023), Some(date(2023, 2, 28)));
        assert_eq!(occurrence_in_year(&leap, 2024), Some(date(2024, 2, 29)));
        assert_eq!(
            next_occurrence(date(2024, 3, 1), &leap),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn test_shift_weekend() {
        // Saturday and Sunday move to Monday
        assert_eq!(shift_weekend(date(2024, 5, 25)), date(2024, 5, 27));
        assert_eq!(shift_weekend(date(2024, 5, 26)), date(2024, 5, 27));
        // Weekdays stay put
        for day in 20..=24 {
            assert_eq!(shift_weekend(date(2024, 5, day)), date(2024, 5, day));
        }
    }

    #[test]
    fn test_weekday_within_window() {
        assert_eq!(
            congratulation_date(today(), &birthday("22.05.1990"), DEFAULT_WINDOW_DAYS),
            Some(date(2024, 5, 22))
        );
    }

    #[test]
    fn test_saturday_shifted_to_monday_on_day_seven() {
        assert_eq!(
            congratulation_date(today(), &birthday("25.05.1990"), DEFAULT_WINDOW_DAYS),
            Some(date(2024, 5, 27))
        );
    }

    #[test]
    fn test_birthday_today_is_excluded() {
        assert_eq!(
            congratulation_date(today(), &birthday("20.05.1990"), DEFAULT_WINDOW_DAYS),
            None
        );
    }

    #[test]
    fn test_birthday_eight_days_out_is_excluded() {
        assert_eq!(
            congratulation_date(today(), &birthday("28.05.1990"), DEFAULT_WINDOW_DAYS),
            None
        );
        assert_eq!(
            congratulation_date(today(), &birthday("31.05.1990"), DEFAULT_WINDOW_DAYS),
            None
        );
    }

    #[test]
    fn test_weekend_on_day_seven_shifted_out_of_window() {
        // Monday 2024-05-13: Sunday 19th is day 6 -> Monday 20th (day 7), kept.
        let monday = date(2024, 5, 13);
        assert_eq!(
            congratulation_date(monday, &birthday("19.05.1990"), DEFAULT_WINDOW_DAYS),
            Some(date(2024, 5, 20))
        );

        // Sunday 2024-05-19: Sunday 26th is day 7 -> Monday 27th (day 8), dropped.
        let sunday = date(2024, 5, 19);
        assert_eq!(
            congratulation_date(sunday, &birthday("26.05.1990"), DEFAULT_WINDOW_DAYS),
            None
        );

        // Saturday 2024-05-18: Saturday 25th is day 7 -> Monday 27th (day 9), dropped.
        let saturday = date(2024, 5, 18);
        assert_eq!(
            congratulation_date(saturday, &birthday("25.05.1990"), DEFAULT_WINDOW_DAYS),
            None
        );
    }

    #[test]
    fn test_weekend_birthday_today_shifts_into_window() {
        // Saturday 2024-05-25 birthday on the same day -> Monday 27th, day 2.
        let saturday = date(2024, 5, 25);
        assert_eq!(
            congratulation_date(saturday, &birthday("25.05.1990"), DEFAULT_WINDOW_DAYS),
            Some(date(2024, 5, 27))
        );
    }

    #[test]
    fn test_window_across_year_end() {
        // Friday 2024-12-27: 2 January 2025 is a Thursday, day 6.
        let friday = date(2024, 12, 27);
        assert_eq!(
            congratulation_date(friday, &birthday("02.01.1985"), DEFAULT_WINDOW_DAYS),
            Some(date(2025, 1, 2))
        );
    }

    #[test]
    fn test_custom_window() {
        assert_eq!(
            congratulation_date(today(), &birthday("31.05.1990"), 14),
            Some(date(2024, 5, 31))
        );
        assert_eq!(
            congratulation_date(today(), &birthday("22.05.1990"), 1),
            None
        );
        assert_eq!(congratulation_date(today(), &birthday("21.05.1990"), 0), None);
    }
}
