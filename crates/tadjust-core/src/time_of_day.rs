//! Time-of-day helpers.
//!
//! These work on the clock part of a value only. A [`NaiveDateTime`] keeps
//! its date; arithmetic that crosses midnight wraps around instead of
//! moving to another day.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::duration::{DurationConfig, DurationParts, ExtendedDuration};
use crate::error::{AdjustError, Result};

const SECONDS_PER_DAY: i64 = 86_400;
const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = SECONDS_PER_DAY * MICROS_PER_SECOND;

/// A value that carries a time-of-day.
pub trait TimeOfDay: Copy + Ord + std::fmt::Debug {
    fn time_of_day(&self) -> NaiveTime;

    /// The same kind of value with its clock set to `time`.
    fn with_time_of_day(&self, time: NaiveTime) -> Self;
}

impl TimeOfDay for NaiveTime {
    fn time_of_day(&self) -> NaiveTime {
        *self
    }

    fn with_time_of_day(&self, time: NaiveTime) -> Self {
        time
    }
}

impl TimeOfDay for NaiveDateTime {
    fn time_of_day(&self) -> NaiveTime {
        self.time()
    }

    fn with_time_of_day(&self, time: NaiveTime) -> Self {
        self.date().and_time(time)
    }
}

fn micros_since_midnight(time: NaiveTime) -> i64 {
    time.num_seconds_from_midnight() as i64 * MICROS_PER_SECOND + (time.nanosecond() / 1000) as i64
}

fn time_from_micros(micros: i64) -> Result<NaiveTime> {
    let wrapped = micros.rem_euclid(MICROS_PER_DAY);
    let seconds = (wrapped / MICROS_PER_SECOND) as u32;
    let nanos = (wrapped % MICROS_PER_SECOND) as u32 * 1000;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos).ok_or_else(|| {
        AdjustError::OutOfRange(format!("{} microseconds is not a time of day", micros))
    })
}

/// Seconds since midnight, with microsecond fractions.
pub fn time_to_seconds<T: TimeOfDay>(value: T) -> f64 {
    micros_since_midnight(value.time_of_day()) as f64 / MICROS_PER_SECOND as f64
}

/// The time of day `seconds` after midnight, wrapping every 24 hours.
///
/// Negative inputs count back from midnight.
pub fn seconds_to_time(seconds: f64) -> Result<NaiveTime> {
    if !seconds.is_finite() {
        return Err(AdjustError::InvalidArgument(format!(
            "seconds must be a finite number, but is {}",
            seconds
        )));
    }
    let micros = (seconds.rem_euclid(SECONDS_PER_DAY as f64) * MICROS_PER_SECOND as f64).round();
    time_from_micros(micros as i64)
}

/// Forward distance on the clock from `from` to `to`.
///
/// Always in `[0, 24h)`: going from 22:00 to 02:00 is four hours.
pub fn time_difference<T: TimeOfDay>(from: T, to: T, config: DurationConfig) -> ExtendedDuration {
    let delta = (micros_since_midnight(to.time_of_day())
        - micros_since_midnight(from.time_of_day()))
    .rem_euclid(MICROS_PER_DAY);
    let parts = DurationParts {
        seconds: (delta / MICROS_PER_SECOND) as f64,
        microseconds: (delta % MICROS_PER_SECOND) as f64,
        ..Default::default()
    };
    ExtendedDuration::from_parts(parts, config)
}

/// Whether `value` falls within `[start, end]` on the clock.
///
/// When `start` is later than `end` the range crosses midnight.
pub fn is_time_in_range<T: TimeOfDay>(value: T, start: NaiveTime, end: NaiveTime) -> bool {
    let time = value.time_of_day();
    if start <= end {
        start <= time && time <= end
    } else {
        time >= start || time <= end
    }
}

/// Round the clock to the nearest multiple of `round_to_secs`, halves up.
///
/// Rounding past the last multiple before midnight wraps to 00:00 of the
/// same date.
pub fn round_time<T: TimeOfDay>(value: T, round_to_secs: u32) -> Result<T> {
    if round_to_secs == 0 {
        return Err(AdjustError::InvalidArgument(format!(
            "round_to must be a positive number of seconds, but is {}",
            round_to_secs
        )));
    }
    let step = round_to_secs as i64 * MICROS_PER_SECOND;
    let micros = micros_since_midnight(value.time_of_day());
    let rounded = (micros + step / 2).div_euclid(step) * step;
    Ok(value.with_time_of_day(time_from_micros(rounded)?))
}
