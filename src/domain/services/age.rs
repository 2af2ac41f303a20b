//! Age computation
//!
//! Whole years between two calendar dates. The birthday check compares
//! `(month, day)` pairs, so a 29 February birthday only counts as reached on
//! 1 March in non-leap years.

use chrono::{Datelike, NaiveDate};

/// Age in whole years on `on` for someone born on `birth`.
///
/// Negative when `on` precedes `birth`; the ordering is not validated.
pub fn age_in_years(birth: NaiveDate, on: NaiveDate) -> i32 {
    let birthday_pending = (on.month(), on.day()) < (birth.month(), birth.day());
    on.year() - birth.year() - i32::from(birthday_pending)
}
