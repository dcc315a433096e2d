//! The public adjuster facade.
//!
//! Each function here wraps a single-value operation from [`resolver`],
//! [`calendar`], or [`time_of_day`] so that its date-bearing argument can be
//! one value or a whole collection:
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use tadjust_core::adjuster;
//! use tadjust_core::dispatch::Target;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
//!
//! let one = adjuster::next(Weekday::Sat, d(13)).unwrap();
//! assert_eq!(one, Target::One(d(15)));
//!
//! let many = adjuster::next(Weekday::Sat, vec![d(13), d(15)]).unwrap();
//! assert_eq!(many.into_vec(), vec![d(15), d(22)]);
//! ```
//!
//! The weekday is normalized once, before any element is visited, so an
//! invalid weekday fails even for an empty collection.
//!
//! [`time_to_seconds`] is the exception: its result is a float, which has
//! no total order and so cannot populate every container shape. It takes a
//! single value only.

use chrono::{NaiveTime, Weekday};

use crate::calendar::{self, Temporal};
use crate::dispatch::{Target, elementwise};
use crate::duration::{DurationConfig, ExtendedDuration};
use crate::error::Result;
use crate::resolver;
use crate::time_of_day::{self, TimeOfDay};
use crate::weekday::WeekdaySpec;

fn normalize(weekday: impl Into<WeekdaySpec>) -> Result<Weekday> {
    weekday.into().normalize()
}

macro_rules! weekday_adjusters {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<T: Temporal>(
                weekday: impl Into<WeekdaySpec>,
                target: impl Into<Target<T>>,
            ) -> Result<Target<T>> {
                let weekday = normalize(weekday)?;
                elementwise(target, |date| resolver::$name(weekday, date))
            }
        )*
    };
}

macro_rules! calendar_adjusters {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<T: Temporal>(target: impl Into<Target<T>>) -> Result<Target<T>> {
                elementwise(target, calendar::$name)
            }
        )*
    };
}

weekday_adjusters! {
    /// See [`resolver::next`].
    next;
    /// See [`resolver::next_or_same`].
    next_or_same;
    /// See [`resolver::last`].
    last;
    /// See [`resolver::last_or_same`].
    last_or_same;
    /// See [`resolver::first_of_month`].
    first_of_month;
    /// See [`resolver::first_of_next_month`].
    first_of_next_month;
    /// See [`resolver::first_of_last_month`].
    first_of_last_month;
    /// See [`resolver::last_of_month`].
    last_of_month;
    /// See [`resolver::last_of_next_month`].
    last_of_next_month;
    /// See [`resolver::last_of_last_month`].
    last_of_last_month;
    /// See [`resolver::first_of_year`].
    first_of_year;
    /// See [`resolver::first_of_next_year`].
    first_of_next_year;
    /// See [`resolver::first_of_last_year`].
    first_of_last_year;
    /// See [`resolver::last_of_year`].
    last_of_year;
    /// See [`resolver::last_of_next_year`].
    last_of_next_year;
    /// See [`resolver::last_of_last_year`].
    last_of_last_year;
}

/// See [`resolver::nth_from_date`].
pub fn nth_from_date<T: Temporal>(
    weekday: impl Into<WeekdaySpec>,
    target: impl Into<Target<T>>,
    n: i64,
) -> Result<Target<T>> {
    let weekday = normalize(weekday)?;
    elementwise(target, |date| resolver::nth_from_date(weekday, date, n))
}

/// See [`resolver::nth_of_month`].
pub fn nth_of_month<T: Temporal>(
    weekday: impl Into<WeekdaySpec>,
    target: impl Into<Target<T>>,
    n: i64,
) -> Result<Target<T>> {
    let weekday = normalize(weekday)?;
    elementwise(target, |date| resolver::nth_of_month(weekday, date, n))
}

/// See [`resolver::nth_of_year`].
pub fn nth_of_year<T: Temporal>(
    weekday: impl Into<WeekdaySpec>,
    target: impl Into<Target<T>>,
    n: i64,
) -> Result<Target<T>> {
    let weekday = normalize(weekday)?;
    elementwise(target, |date| resolver::nth_of_year(weekday, date, n))
}

/// See [`resolver::which_of_month`].
pub fn which_of_month<T: Temporal>(
    weekday: impl Into<WeekdaySpec>,
    target: impl Into<Target<T>>,
) -> Result<Target<u32>> {
    let weekday = normalize(weekday)?;
    elementwise(target, |date| resolver::which_of_month(weekday, date))
}

/// See [`resolver::which_of_year`].
pub fn which_of_year<T: Temporal>(
    weekday: impl Into<WeekdaySpec>,
    target: impl Into<Target<T>>,
) -> Result<Target<u32>> {
    let weekday = normalize(weekday)?;
    elementwise(target, |date| resolver::which_of_year(weekday, date))
}

calendar_adjusters! {
    first_day_of_week;
    first_day_of_next_week;
    first_day_of_last_week;
    last_day_of_week;
    last_day_of_next_week;
    last_day_of_last_week;
    first_day_of_month;
    first_day_of_next_month;
    first_day_of_last_month;
    last_day_of_month;
    last_day_of_next_month;
    last_day_of_last_month;
    first_day_of_year;
    first_day_of_next_year;
    first_day_of_last_year;
    last_day_of_year;
    last_day_of_next_year;
    last_day_of_last_year;
}

/// See [`calendar::int_to_day_of_year`].
pub fn int_to_day_of_year<T: Temporal>(target: impl Into<Target<T>>, n: i64) -> Result<Target<T>> {
    elementwise(target, |date| calendar::int_to_day_of_year(date, n))
}

/// See [`calendar::int_to_day_of_month`].
pub fn int_to_day_of_month<T: Temporal>(
    target: impl Into<Target<T>>,
    n: i64,
) -> Result<Target<T>> {
    elementwise(target, |date| calendar::int_to_day_of_month(date, n))
}

pub fn date_to_int_of_year<T: Temporal>(target: impl Into<Target<T>>) -> Result<Target<u32>> {
    elementwise(target, |date| Ok(calendar::date_to_int_of_year(date)))
}

pub fn date_to_int_of_month<T: Temporal>(target: impl Into<Target<T>>) -> Result<Target<u32>> {
    elementwise(target, |date| Ok(calendar::date_to_int_of_month(date)))
}

pub fn day_of_year<T: Temporal>(target: impl Into<Target<T>>) -> Result<Target<u32>> {
    elementwise(target, |date| Ok(calendar::day_of_year(date)))
}

// ── Time of day ─────────────────────────────────────────────────────────────

/// Seconds since midnight. Single values only.
pub fn time_to_seconds<T: TimeOfDay>(value: T) -> f64 {
    time_of_day::time_to_seconds(value)
}

/// See [`time_of_day::seconds_to_time`].
pub fn seconds_to_time(target: impl Into<Target<f64>>) -> Result<Target<NaiveTime>> {
    elementwise(target, time_of_day::seconds_to_time)
}

/// Forward clock distance from each `from` value to `to`.
pub fn time_difference<T: TimeOfDay>(
    from: impl Into<Target<T>>,
    to: T,
    config: DurationConfig,
) -> Result<Target<ExtendedDuration>> {
    elementwise(from, |value| Ok(time_of_day::time_difference(value, to, config)))
}

pub fn is_time_in_range<T: TimeOfDay>(
    target: impl Into<Target<T>>,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<Target<bool>> {
    elementwise(target, |value| Ok(time_of_day::is_time_in_range(value, start, end)))
}

/// See [`time_of_day::round_time`].
pub fn round_time<T: TimeOfDay>(target: impl Into<Target<T>>, round_to_secs: u32) -> Result<Target<T>> {
    elementwise(target, |value| time_of_day::round_time(value, round_to_secs))
}
