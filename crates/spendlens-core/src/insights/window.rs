//! Rolling month windows
//!
//! A transaction belongs to an N-month window when the number of whole
//! calendar months between its date and "today plus one month" lies in
//! `0..=N + 1`. Anchoring one month ahead keeps today's transactions in the
//! current-month view however far into the month today is. Month counting
//! is day-of-month aware and truncates, so dates close to a month boundary
//! flip in or out a day earlier or later than a calendar cut would.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::Transaction;

/// Window used for spend-by-category
pub const CURRENT_MONTH: u32 = 0;

/// Window used for bill tracking (about thirteen rolling months)
pub const LAST_12_MONTHS: u32 = 12;

/// Whole calendar months from `start` to `end`, truncated toward zero
///
/// Negative when `end` is before `start`. A month only counts once the
/// day-of-month in `end` has reached the day-of-month in `start`.
pub fn elapsed_whole_months(start: NaiveDate, end: NaiveDate) -> i64 {
    fn packed(date: NaiveDate) -> i64 {
        (i64::from(date.year()) * 12 + i64::from(date.month0())) * 32 + i64::from(date.day())
    }
    (packed(end) - packed(start)) / 32
}

/// The date windows are measured against: today plus one month
///
/// Clamps to the end of the month (31 January becomes 28/29 February).
pub fn window_anchor(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// Whether `date` falls inside the `months_back` window ending today
pub fn is_within_window(date: NaiveDate, months_back: u32, today: NaiveDate) -> bool {
    let months = elapsed_whole_months(date, window_anchor(today));
    (0..=i64::from(months_back) + 1).contains(&months)
}

/// Transactions inside the `months_back` window, in input order
pub fn select_within_window(
    transactions: &[Transaction],
    months_back: u32,
    today: NaiveDate,
) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|tx| is_within_window(tx.date, months_back, today))
        .collect()
}
