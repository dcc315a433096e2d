//! Weekday-relative date resolution.
//!
//! Every operation here is built on two primitives:
//! - [`occurrence_at_or_after`]: the nearest date on or after a pivot that
//!   falls on a weekday, never moving backward
//! - [`occurrence_at_or_before`]: the mirror image, never moving forward
//!
//! Both use modular day counts rather than stepping day by day.
//!
//! The weekday argument of each operation accepts any [`WeekdaySpec`] form
//! and is normalized before any date arithmetic, so a malformed weekday
//! fails with [`AdjustError::InvalidArgument`] without touching the date.
//!
//! "Nth occurrence" queries on a month or year are bounded: if the month
//! (or year) has no such occurrence, the call fails with
//! [`AdjustError::NoSuchOccurrence`] instead of rolling into the next one.

use chrono::Weekday;

use crate::calendar::{
    Temporal, first_day_of_last_month, first_day_of_last_year, first_day_of_month,
    first_day_of_next_month, first_day_of_next_year, first_day_of_year, last_day_of_year,
    shift_days,
};
use crate::error::{AdjustError, Result};
use crate::weekday::{WeekdaySpec, weekday_name};

/// Highest occurrence ordinal a month can be asked for.
pub const MAX_NTH_OF_MONTH: i64 = 5;

/// Highest occurrence ordinal a year can be asked for.
pub const MAX_NTH_OF_YEAR: i64 = 54;

fn resolve(weekday: impl Into<WeekdaySpec>) -> Result<Weekday> {
    weekday.into().normalize()
}

/// Days to move forward from `from` to reach `to`, in `0..7`.
fn days_until(from: Weekday, to: Weekday) -> i64 {
    let from = from.num_days_from_monday() as i64;
    let to = to.num_days_from_monday() as i64;
    (to - from).rem_euclid(7)
}

fn weeks_to_days(weeks: i64) -> Result<i64> {
    weeks
        .checked_mul(7)
        .ok_or_else(|| AdjustError::OutOfRange(format!("{} weeks overflows a day count", weeks)))
}

/// English ordinal for `n`: 1st, 2nd, 3rd, 4th, 11th, 22nd, …
fn ordinal(n: i64) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn check_ordinal(n: i64, max: i64) -> Result<()> {
    if (1..=max).contains(&n) {
        Ok(())
    } else {
        Err(AdjustError::InvalidArgument(format!(
            "n must be between 1 and {}, but is {}",
            max, n
        )))
    }
}

/// The first date on or after `pivot` that falls on `weekday`.
pub fn occurrence_at_or_after<T: Temporal>(pivot: T, weekday: Weekday) -> Result<T> {
    shift_days(pivot, days_until(pivot.weekday(), weekday))
}

/// The last date on or before `pivot` that falls on `weekday`.
pub fn occurrence_at_or_before<T: Temporal>(pivot: T, weekday: Weekday) -> Result<T> {
    shift_days(pivot, -days_until(weekday, pivot.weekday()))
}

// ── Relative to the date itself ─────────────────────────────────────────────

/// The next `weekday` strictly after `date`.
///
/// If `date` already falls on `weekday`, the result is one week later.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use tadjust_core::resolver::next;
///
/// let thursday = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
/// let saturday = next(Weekday::Sat, thursday).unwrap();
/// assert_eq!(saturday, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
/// ```
pub fn next<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    let ahead = match days_until(date.weekday(), weekday) {
        0 => 7,
        days => days,
    };
    shift_days(date, ahead)
}

/// `date` itself if it falls on `weekday`, otherwise [`next`].
pub fn next_or_same<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    occurrence_at_or_after(date, weekday)
}

/// The previous `weekday` strictly before `date`.
///
/// If `date` already falls on `weekday`, the result is one week earlier.
pub fn last<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    let behind = match days_until(weekday, date.weekday()) {
        0 => 7,
        days => days,
    };
    shift_days(date, -behind)
}

/// `date` itself if it falls on `weekday`, otherwise [`last`].
pub fn last_or_same<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    occurrence_at_or_before(date, weekday)
}

// ── Within a month ──────────────────────────────────────────────────────────

/// The first `weekday` in the month of `date`.
pub fn first_of_month<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    occurrence_at_or_after(first_day_of_month(date)?, weekday)
}

/// The first `weekday` in the month after `date`'s month.
pub fn first_of_next_month<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    first_of_month(weekday, first_day_of_next_month(date)?)
}

/// The first `weekday` in the month before `date`'s month.
pub fn first_of_last_month<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    first_of_month(weekday, first_day_of_last_month(date)?)
}

/// The last `weekday` in the month of `date`.
///
/// This is the occurrence one week before the first `weekday` of the
/// following month.
pub fn last_of_month<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    let first_of_following = first_of_month(weekday, first_day_of_next_month(date)?)?;
    shift_days(first_of_following, -7)
}

/// The last `weekday` in the month after `date`'s month.
pub fn last_of_next_month<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    last_of_month(weekday, first_day_of_next_month(date)?)
}

/// The last `weekday` in the month before `date`'s month.
pub fn last_of_last_month<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    last_of_month(weekday, first_day_of_last_month(date)?)
}

// ── Within a year ───────────────────────────────────────────────────────────

/// The first `weekday` in the year of `date`.
pub fn first_of_year<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    occurrence_at_or_after(first_day_of_year(date)?, weekday)
}

/// The first `weekday` in the year after `date`'s year.
pub fn first_of_next_year<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    first_of_year(weekday, first_day_of_next_year(date)?)
}

/// The first `weekday` in the year before `date`'s year.
pub fn first_of_last_year<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    first_of_year(weekday, first_day_of_last_year(date)?)
}

/// The last `weekday` in the year of `date`; December 31st itself when it
/// falls on `weekday`.
pub fn last_of_year<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    occurrence_at_or_before(last_day_of_year(date)?, weekday)
}

/// The last `weekday` in the year after `date`'s year.
pub fn last_of_next_year<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    last_of_year(weekday, first_day_of_next_year(date)?)
}

/// The last `weekday` in the year before `date`'s year.
pub fn last_of_last_year<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<T> {
    let weekday = resolve(weekday)?;
    last_of_year(weekday, first_day_of_last_year(date)?)
}

// ── Nth occurrence ──────────────────────────────────────────────────────────

/// The `n`-th `weekday` counting from `date`.
///
/// The pivot is moved by `n - 1` weeks and then forward to the nearest
/// `weekday`, so `n = 1` is [`next_or_same`]. There is no upper bound and
/// no existence check. `n` is not validated either: `n = 0` gives the
/// occurrence on or after the same day one week earlier.
pub fn nth_from_date<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T, n: i64) -> Result<T> {
    let weekday = resolve(weekday)?;
    let pivot = shift_days(date, weeks_to_days(n.saturating_sub(1))?)?;
    occurrence_at_or_after(pivot, weekday)
}

/// The `n`-th `weekday` in the month of `date`, `n` in `1..=5`.
///
/// # Errors
///
/// - [`AdjustError::InvalidArgument`] if `n` is outside `1..=5`
/// - [`AdjustError::NoSuchOccurrence`] if the month has fewer than `n`
///   such weekdays
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use tadjust_core::AdjustError;
/// use tadjust_core::resolver::nth_of_month;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
/// let third = nth_of_month(Weekday::Sat, date, 3).unwrap();
/// assert_eq!(third, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
///
/// let july = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// let err = nth_of_month(Weekday::Sat, july, 5).unwrap_err();
/// assert!(matches!(err, AdjustError::NoSuchOccurrence(_)));
/// ```
pub fn nth_of_month<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T, n: i64) -> Result<T> {
    let weekday = resolve(weekday)?;
    check_ordinal(n, MAX_NTH_OF_MONTH)?;

    let first = first_of_month(weekday, date)?;
    let candidate = shift_days(first, weeks_to_days(n - 1)?)?;

    if candidate.month() != date.month() || candidate.year() != date.year() {
        return Err(AdjustError::NoSuchOccurrence(format!(
            "the month does not have a {} occurrence of {}",
            ordinal(n),
            weekday_name(weekday)
        )));
    }

    Ok(candidate)
}

/// The `n`-th `weekday` in the year of `date`, `n` in `1..=54`.
///
/// # Errors
///
/// - [`AdjustError::InvalidArgument`] if `n` is outside `1..=54`
/// - [`AdjustError::NoSuchOccurrence`] if the year has fewer than `n`
///   such weekdays
pub fn nth_of_year<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T, n: i64) -> Result<T> {
    let weekday = resolve(weekday)?;
    check_ordinal(n, MAX_NTH_OF_YEAR)?;

    let first = first_of_year(weekday, date)?;
    let candidate = shift_days(first, weeks_to_days(n - 1)?)?;

    if candidate.year() != date.year() {
        return Err(AdjustError::NoSuchOccurrence(format!(
            "the year does not have a {} occurrence of {}",
            ordinal(n),
            weekday_name(weekday)
        )));
    }

    Ok(candidate)
}

/// Which occurrence of its own weekday `date` is within its month (1-based).
///
/// The weekday argument is validated but does not enter the arithmetic.
pub fn which_of_month<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<u32> {
    resolve(weekday)?;
    Ok((date.day() - 1) / 7 + 1)
}

/// Which occurrence of its own weekday `date` is within its year (1-based).
///
/// The weekday argument is validated but does not enter the arithmetic.
pub fn which_of_year<T: Temporal>(weekday: impl Into<WeekdaySpec>, date: T) -> Result<u32> {
    resolve(weekday)?;
    Ok((date.ordinal() - 1) / 7 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::IsoWeekday;
    use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn dt(year: i32, month: u32, day: u32) -> NaiveDateTime {
        d(year, month, day).and_hms_opt(9, 45, 0).unwrap()
    }

    #[test]
    fn next_is_strictly_after() {
        assert_eq!(next(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 6, 15));
        assert_eq!(next(Weekday::Sat, d(2024, 6, 15)).unwrap(), d(2024, 6, 22));
        assert_eq!(next(Weekday::Sat, d(2024, 12, 31)).unwrap(), d(2025, 1, 4));
    }

    #[test]
    fn next_accepts_every_weekday_form() {
        let expected = dt(2024, 6, 15);
        assert_eq!(next(IsoWeekday::Saturday, dt(2024, 6, 13)).unwrap(), expected);
        assert_eq!(next("SATURDAY", dt(2024, 6, 13)).unwrap(), expected);
        assert_eq!(next(5_i64, dt(2024, 6, 13)).unwrap(), expected);
    }

    #[test]
    fn next_or_same_keeps_matching_date() {
        assert_eq!(next_or_same(Weekday::Sat, d(2024, 6, 15)).unwrap(), d(2024, 6, 15));
        assert_eq!(next_or_same(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 6, 15));
    }

    #[test]
    fn last_is_strictly_before() {
        assert_eq!(last(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 6, 8));
        assert_eq!(last(Weekday::Sat, d(2024, 6, 15)).unwrap(), d(2024, 6, 8));
        assert_eq!(last(Weekday::Sat, d(2025, 1, 1)).unwrap(), d(2024, 12, 28));
    }

    #[test]
    fn last_or_same_keeps_matching_date() {
        assert_eq!(last_or_same(Weekday::Sat, d(2024, 6, 15)).unwrap(), d(2024, 6, 15));
        assert_eq!(last_or_same(Weekday::Sat, d(2025, 1, 1)).unwrap(), d(2024, 12, 28));
    }

    #[test]
    fn month_framings() {
        assert_eq!(first_of_month(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 6, 1));
        assert_eq!(first_of_month(Weekday::Sat, d(2025, 1, 1)).unwrap(), d(2025, 1, 4));
        assert_eq!(first_of_next_month(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 7, 6));
        assert_eq!(first_of_next_month(Weekday::Sat, d(2025, 1, 1)).unwrap(), d(2025, 2, 1));
        assert_eq!(first_of_last_month(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 5, 4));
        assert_eq!(first_of_last_month(Weekday::Sat, d(2025, 1, 1)).unwrap(), d(2024, 12, 7));
        assert_eq!(last_of_month(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 6, 29));
        assert_eq!(last_of_month(Weekday::Sat, d(2025, 1, 1)).unwrap(), d(2025, 1, 25));
        assert_eq!(last_of_next_month(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 7, 27));
        assert_eq!(last_of_next_month(Weekday::Sat, d(2025, 1, 1)).unwrap(), d(2025, 2, 22));
        assert_eq!(last_of_last_month(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 5, 25));
        assert_eq!(last_of_last_month(Weekday::Sat, d(2025, 1, 1)).unwrap(), d(2024, 12, 28));
    }

    #[test]
    fn last_of_month_on_the_final_day() {
        // 2024-08-31 is a Saturday.
        assert_eq!(last_of_month(Weekday::Sat, d(2024, 8, 2)).unwrap(), d(2024, 8, 31));
    }

    #[test]
    fn year_framings() {
        assert_eq!(first_of_year(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 1, 6));
        assert_eq!(first_of_year(Weekday::Sat, d(2025, 1, 1)).unwrap(), d(2025, 1, 4));
        assert_eq!(first_of_next_year(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2025, 1, 4));
        assert_eq!(first_of_last_year(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2023, 1, 7));
        assert_eq!(last_of_year(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2024, 12, 28));
        assert_eq!(last_of_next_year(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2025, 12, 27));
        assert_eq!(last_of_last_year(Weekday::Sat, d(2024, 6, 13)).unwrap(), d(2023, 12, 30));
    }

    #[test]
    fn last_of_year_includes_december_31st() {
        // 2022-12-31 is a Saturday.
        assert_eq!(last_of_year(Weekday::Sat, d(2022, 5, 5)).unwrap(), d(2022, 12, 31));
    }

    #[test]
    fn nth_from_date_steps_whole_weeks() {
        assert_eq!(nth_from_date(Weekday::Sat, d(2024, 6, 13), 1).unwrap(), d(2024, 6, 15));
        assert_eq!(nth_from_date(Weekday::Sat, d(2024, 6, 13), 2).unwrap(), d(2024, 6, 22));
        assert_eq!(nth_from_date(Weekday::Sat, d(2024, 6, 13), 3).unwrap(), d(2024, 6, 29));
        assert_eq!(nth_from_date(Weekday::Sat, d(2024, 6, 15), 1).unwrap(), d(2024, 6, 15));
        assert_eq!(nth_from_date(Weekday::Sat, d(2024, 6, 13), 0).unwrap(), d(2024, 6, 8));
    }

    #[test]
    fn nth_from_date_overflow_is_out_of_range() {
        let err = nth_from_date(Weekday::Sat, d(2024, 6, 13), i64::MAX).unwrap_err();
        assert!(matches!(err, AdjustError::OutOfRange(_)));
    }

    #[test]
    fn nth_of_month_every_valid_ordinal() {
        let expected = [d(2024, 6, 1), d(2024, 6, 8), d(2024, 6, 15), d(2024, 6, 22), d(2024, 6, 29)];
        for (n, want) in (1..=5).zip(expected) {
            assert_eq!(nth_of_month(Weekday::Sat, d(2024, 6, 13), n).unwrap(), want, "n={}", n);
        }
    }

    #[test]
    fn nth_of_month_rejects_bad_ordinals() {
        for n in [-1, 0, 6, 7] {
            let err = nth_of_month(Weekday::Sat, d(2024, 6, 13), n).unwrap_err();
            assert_eq!(
                err,
                AdjustError::InvalidArgument(format!("n must be between 1 and 5, but is {}", n))
            );
        }
    }

    #[test]
    fn nth_of_month_missing_occurrence() {
        for date in [d(2024, 7, 1), d(1992, 6, 13)] {
            let err = nth_of_month(Weekday::Sat, date, 5).unwrap_err();
            assert_eq!(
                err,
                AdjustError::NoSuchOccurrence(
                    "the month does not have a 5th occurrence of saturday".into()
                )
            );
        }
    }

    #[test]
    fn nth_of_month_keeps_time_of_day() {
        assert_eq!(nth_of_month("saturday", dt(2024, 6, 13), 3).unwrap(), dt(2024, 6, 15));
    }

    #[test]
    fn nth_of_year_bounds() {
        assert_eq!(nth_of_year(Weekday::Sat, d(2024, 6, 13), 1).unwrap(), d(2024, 1, 6));
        assert_eq!(nth_of_year(Weekday::Sat, d(2024, 6, 13), 10).unwrap(), d(2024, 3, 9));
        // 2022 starts on a Saturday and so has 53 of them.
        assert_eq!(nth_of_year(Weekday::Sat, d(2022, 2, 2), 53).unwrap(), d(2022, 12, 31));

        for n in [-1, 0, 55] {
            let err = nth_of_year(Weekday::Sat, d(2024, 6, 13), n).unwrap_err();
            assert_eq!(
                err,
                AdjustError::InvalidArgument(format!("n must be between 1 and 54, but is {}", n))
            );
        }

        for date in [d(2024, 7, 1), d(1992, 6, 13)] {
            let err = nth_of_year(Weekday::Sat, date, 53).unwrap_err();
            assert_eq!(
                err,
                AdjustError::NoSuchOccurrence(
                    "the year does not have a 53rd occurrence of saturday".into()
                )
            );
        }
    }

    #[test]
    fn which_occurrence() {
        assert_eq!(which_of_month(Weekday::Sat, d(2024, 6, 15)).unwrap(), 3);
        assert_eq!(which_of_month(Weekday::Sat, d(2024, 6, 29)).unwrap(), 5);
        assert_eq!(which_of_year(Weekday::Sat, d(2024, 3, 9)).unwrap(), 10);
        assert_eq!(which_of_year(Weekday::Sat, d(2024, 1, 1)).unwrap(), 1);
    }

    #[test]
    fn malformed_weekday_fails_before_arithmetic() {
        let err = nth_of_month("someday", NaiveDate::MAX, 9).unwrap_err();
        assert!(matches!(err, AdjustError::InvalidArgument(msg) if msg.contains("someday")));
        assert!(which_of_month(9_i64, d(2024, 6, 15)).is_err());
    }

    #[test]
    fn ordinal_suffixes() {
        let rendered: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 53].map(ordinal).into();
        assert_eq!(
            rendered,
            ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "53rd"]
        );
    }

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (0_u64..200_000).prop_map(|offset| d(1900, 1, 1) + Days::new(offset))
    }

    fn arb_weekday() -> impl Strategy<Value = Weekday> {
        (0_i64..7).prop_map(|i| crate::weekday::from_zero_based(i).unwrap())
    }

    proptest! {
        #[test]
        fn next_lands_on_weekday_strictly_later(date in arb_date(), weekday in arb_weekday()) {
            let out = next(weekday, date).unwrap();
            prop_assert_eq!(out.weekday(), weekday);
            prop_assert!(out > date);
            prop_assert!((out - date).num_days() <= 7);
        }

        #[test]
        fn last_lands_on_weekday_strictly_earlier(date in arb_date(), weekday in arb_weekday()) {
            let out = last(weekday, date).unwrap();
            prop_assert_eq!(out.weekday(), weekday);
            prop_assert!(out < date);
            prop_assert!((date - out).num_days() <= 7);
        }

        #[test]
        fn next_or_same_is_identity_only_on_matching_day(date in arb_date(), weekday in arb_weekday()) {
            let out = next_or_same(weekday, date).unwrap();
            if date.weekday() == weekday {
                prop_assert_eq!(out, date);
            } else {
                prop_assert_eq!(out, next(weekday, date).unwrap());
            }
        }

        #[test]
        fn nth_of_month_stays_in_month(date in arb_date(), weekday in arb_weekday(), n in 1_i64..=5) {
            match nth_of_month(weekday, date, n) {
                Ok(out) => {
                    prop_assert_eq!(out.month(), date.month());
                    prop_assert_eq!(out.year(), date.year());
                    prop_assert_eq!(out.weekday(), weekday);
                    prop_assert_eq!(i64::from(which_of_month(weekday, out).unwrap()), n);
                }
                Err(err) => {
                    prop_assert!(n >= 5, "only a fifth occurrence can be missing");
                    prop_assert!(matches!(err, AdjustError::NoSuchOccurrence(_)));
                }
            }
        }

        #[test]
        fn month_edges_bracket_every_occurrence(date in arb_date(), weekday in arb_weekday()) {
            let first = first_of_month(weekday, date).unwrap();
            let last_one = last_of_month(weekday, date).unwrap();
            prop_assert_eq!(first.month(), date.month());
            prop_assert_eq!(last_one.month(), date.month());
            prop_assert!(first.day() <= 7);
            prop_assert!(last_one <= crate::calendar::last_day_of_month(date).unwrap());
            prop_assert!((crate::calendar::last_day_of_month(date).unwrap() - last_one).num_days() < 7);
        }
    }
}
