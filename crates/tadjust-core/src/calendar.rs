//! Calendar boundary helpers.
//!
//! First and last days of weeks, months, and years, plus day-of-month and
//! day-of-year conversions. Weeks start on Monday. All helpers are generic
//! over [`Temporal`], so a date stays a date and a datetime keeps its
//! time-of-day unchanged.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};

use crate::error::{AdjustError, Result};

/// A calendar value that carries a date and may carry a time-of-day.
///
/// Adjusters only ever touch the date part; the time-of-day of a
/// [`NaiveDateTime`] passes through unchanged.
pub trait Temporal: Datelike + Copy + Ord + std::fmt::Debug {
    /// The calendar date of this value.
    fn calendar_date(&self) -> NaiveDate;

    /// The same kind of value, moved to `date`.
    fn with_calendar_date(&self, date: NaiveDate) -> Self;
}

impl Temporal for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }

    fn with_calendar_date(&self, date: NaiveDate) -> Self {
        date
    }
}

impl Temporal for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }

    fn with_calendar_date(&self, date: NaiveDate) -> Self {
        date.and_time(self.time())
    }
}

/// Move `value` by a signed number of days.
pub fn shift_days<T: Temporal>(value: T, days: i64) -> Result<T> {
    let date = value.calendar_date();
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };

    shifted
        .map(|d| value.with_calendar_date(d))
        .ok_or_else(|| AdjustError::OutOfRange(format!("{} shifted by {} days", date, days)))
}

/// Move `value` by a signed number of months, clamping the day to the
/// target month's length.
pub fn shift_months<T: Temporal>(value: T, months: i32) -> Result<T> {
    let date = value.calendar_date();
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };

    shifted
        .map(|d| value.with_calendar_date(d))
        .ok_or_else(|| AdjustError::OutOfRange(format!("{} shifted by {} months", date, months)))
}

fn with_ymd<T: Temporal>(value: T, year: i32, month: u32, day: u32) -> Result<T> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| value.with_calendar_date(d))
        .ok_or_else(|| {
            AdjustError::OutOfRange(format!(
                "{:04}-{:02}-{:02} is not a representable date",
                year, month, day
            ))
        })
}

// ── Weeks ───────────────────────────────────────────────────────────────────

/// Monday of the week containing `value`.
pub fn first_day_of_week<T: Temporal>(value: T) -> Result<T> {
    let days_from_monday = value.weekday().num_days_from_monday() as i64;
    shift_days(value, -days_from_monday)
}

/// Monday of the week after the one containing `value`.
pub fn first_day_of_next_week<T: Temporal>(value: T) -> Result<T> {
    shift_days(first_day_of_week(value)?, 7)
}

/// Monday of the week before the one containing `value`.
pub fn first_day_of_last_week<T: Temporal>(value: T) -> Result<T> {
    shift_days(first_day_of_week(value)?, -7)
}

/// Sunday of the week containing `value`.
pub fn last_day_of_week<T: Temporal>(value: T) -> Result<T> {
    let days_to_sunday = 6 - value.weekday().num_days_from_monday() as i64;
    shift_days(value, days_to_sunday)
}

/// Sunday of the week after the one containing `value`.
pub fn last_day_of_next_week<T: Temporal>(value: T) -> Result<T> {
    shift_days(last_day_of_week(value)?, 7)
}

/// Sunday of the week before the one containing `value`.
pub fn last_day_of_last_week<T: Temporal>(value: T) -> Result<T> {
    shift_days(last_day_of_week(value)?, -7)
}

// ── Months ──────────────────────────────────────────────────────────────────

/// First day of the month containing `value`.
pub fn first_day_of_month<T: Temporal>(value: T) -> Result<T> {
    with_ymd(value, value.year(), value.month(), 1)
}

/// First day of the month after the one containing `value`.
pub fn first_day_of_next_month<T: Temporal>(value: T) -> Result<T> {
    shift_months(first_day_of_month(value)?, 1)
}

/// First day of the month before the one containing `value`.
pub fn first_day_of_last_month<T: Temporal>(value: T) -> Result<T> {
    shift_months(first_day_of_month(value)?, -1)
}

/// Last day of the month containing `value`.
pub fn last_day_of_month<T: Temporal>(value: T) -> Result<T> {
    shift_days(first_day_of_next_month(value)?, -1)
}

/// Last day of the month after the one containing `value`.
pub fn last_day_of_next_month<T: Temporal>(value: T) -> Result<T> {
    last_day_of_month(first_day_of_next_month(value)?)
}

/// Last day of the month before the one containing `value`.
pub fn last_day_of_last_month<T: Temporal>(value: T) -> Result<T> {
    shift_days(first_day_of_month(value)?, -1)
}

// ── Years ───────────────────────────────────────────────────────────────────

/// January 1st of the year containing `value`.
pub fn first_day_of_year<T: Temporal>(value: T) -> Result<T> {
    with_ymd(value, value.year(), 1, 1)
}

/// January 1st of the following year.
pub fn first_day_of_next_year<T: Temporal>(value: T) -> Result<T> {
    with_ymd(value, value.year() + 1, 1, 1)
}

/// January 1st of the preceding year.
pub fn first_day_of_last_year<T: Temporal>(value: T) -> Result<T> {
    with_ymd(value, value.year() - 1, 1, 1)
}

/// December 31st of the year containing `value`.
pub fn last_day_of_year<T: Temporal>(value: T) -> Result<T> {
    with_ymd(value, value.year(), 12, 31)
}

/// December 31st of the following year.
pub fn last_day_of_next_year<T: Temporal>(value: T) -> Result<T> {
    with_ymd(value, value.year() + 1, 12, 31)
}

/// December 31st of the preceding year.
pub fn last_day_of_last_year<T: Temporal>(value: T) -> Result<T> {
    with_ymd(value, value.year() - 1, 12, 31)
}

// ── Absolute positions ──────────────────────────────────────────────────────

/// The `n`-th day of `value`'s year, counting January 1st as day 1.
///
/// `n` is an offset from January 1st, so values past the year's end roll
/// into the next year.
pub fn int_to_day_of_year<T: Temporal>(value: T, n: i64) -> Result<T> {
    shift_days(first_day_of_year(value)?, n.saturating_sub(1))
}

/// The `n`-th day of `value`'s month, counting the 1st as day 1.
///
/// Like [`int_to_day_of_year`] this is additive: `n` past the month's
/// length lands in the following month.
pub fn int_to_day_of_month<T: Temporal>(value: T, n: i64) -> Result<T> {
    shift_days(first_day_of_month(value)?, n.saturating_sub(1))
}

/// Day of the year, 1 for January 1st.
pub fn date_to_int_of_year<T: Temporal>(value: T) -> u32 {
    value.ordinal()
}

/// Day of the month, 1 for the 1st.
pub fn date_to_int_of_month<T: Temporal>(value: T) -> u32 {
    value.day()
}

/// Day of the year, 1 for January 1st.
pub fn day_of_year<T: Temporal>(value: T) -> u32 {
    date_to_int_of_year(value)
}
