//! A duration that also counts months and years.
//!
//! [`chrono::TimeDelta`] only knows fixed-length units. [`ExtendedDuration`]
//! adds months and years on top, converting between them and days with the
//! approximations in a [`DurationConfig`]. The configuration is carried by
//! each value rather than stored globally, so two durations built with
//! different month lengths can coexist.
//!
//! Components are kept normalized:
//! - `0 <= microseconds < 1_000_000`
//! - `0 <= seconds < 86_400`
//! - `0 <= days < days_in_month` (rounded down)
//! - `0 <= months < 12`
//! - `years` carries the sign

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use chrono::TimeDelta;
use serde::Serialize;

use crate::error::{AdjustError, Result};

const SECONDS_PER_DAY: i64 = 86_400;
const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i128 = SECONDS_PER_DAY as i128 * MICROS_PER_SECOND as i128;

/// Day-length approximations used to relate months and years to days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationConfig {
    /// Average days per month (Gregorian mean by default).
    pub days_in_month: f64,
    /// Average days per year (Julian mean by default).
    pub days_in_year: f64,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            days_in_month: 30.436875,
            days_in_year: 365.25,
        }
    }
}

impl DurationConfig {
    /// Build a configuration, rejecting non-positive or non-finite lengths.
    pub fn new(days_in_month: f64, days_in_year: f64) -> Result<Self> {
        for (name, value) in [("days_in_month", days_in_month), ("days_in_year", days_in_year)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AdjustError::InvalidArgument(format!(
                    "{} must be a positive number, but is {}",
                    name, value
                )));
            }
        }
        Ok(Self {
            days_in_month,
            days_in_year,
        })
    }
}

/// Raw, possibly fractional, components used to construct an [`ExtendedDuration`].
///
/// ```
/// use tadjust_core::duration::{DurationConfig, DurationParts, ExtendedDuration};
///
/// let config = DurationConfig::new(30.0, 365.0).unwrap();
/// let parts = DurationParts { months: 1.0, days: 45.0, ..Default::default() };
/// let duration = ExtendedDuration::from_parts(parts, config);
/// assert_eq!((duration.months(), duration.days()), (2, 15));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DurationParts {
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub milliseconds: f64,
    pub microseconds: f64,
}

/// A normalized years/months/days/seconds/microseconds duration.
///
/// Equality, ordering, and hashing look only at the components, not at the
/// configuration. Because components are normalized, the component-wise
/// ordering agrees with ordering by length.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExtendedDuration {
    years: i64,
    months: i64,
    days: i64,
    seconds: i64,
    microseconds: i64,
    #[serde(skip)]
    config: DurationConfig,
}

impl ExtendedDuration {
    /// A zero-length duration.
    pub fn zero(config: DurationConfig) -> Self {
        Self::from_parts(DurationParts::default(), config)
    }

    /// Build from raw components, normalizing them.
    pub fn from_parts(parts: DurationParts, config: DurationConfig) -> Self {
        // Whole months go into the month count, fractions cascade down.
        let years_whole = parts.years.trunc();
        let months_total = parts.months + (parts.years - years_whole) * 12.0;
        let months_whole = months_total.trunc();
        // Components past the i64 range saturate instead of wrapping.
        let mut month_count = (years_whole as i64)
            .saturating_mul(12)
            .saturating_add(months_whole as i64);

        let days_total = (months_total - months_whole) * config.days_in_month
            + parts.weeks * 7.0
            + parts.days;

        let sub_day_micros = (days_total * SECONDS_PER_DAY as f64
            + parts.hours * 3600.0
            + parts.minutes * 60.0
            + parts.seconds)
            * MICROS_PER_SECOND as f64
            + parts.milliseconds * 1000.0
            + parts.microseconds;
        let total_micros = sub_day_micros.round() as i128;

        let whole_days = i64::try_from(total_micros.div_euclid(MICROS_PER_DAY))
            .unwrap_or(if total_micros < 0 { i64::MIN } else { i64::MAX });
        let mut rest_micros = total_micros.rem_euclid(MICROS_PER_DAY);

        // Days beyond a month's length carry into months; the fractional
        // day left over by a non-integral month length becomes time-of-day.
        let month_carry = (whole_days as f64 / config.days_in_month).floor();
        let days_left = whole_days as f64 - month_carry * config.days_in_month;
        let mut days = days_left.floor() as i64;
        rest_micros += ((days_left - days as f64) * MICROS_PER_DAY as f64).round() as i128;
        if rest_micros >= MICROS_PER_DAY {
            days += 1;
            rest_micros -= MICROS_PER_DAY;
        }
        month_count = month_count.saturating_add(month_carry as i64);

        Self {
            years: month_count.div_euclid(12),
            months: month_count.rem_euclid(12),
            days,
            seconds: (rest_micros / MICROS_PER_SECOND as i128) as i64,
            microseconds: (rest_micros % MICROS_PER_SECOND as i128) as i64,
            config,
        }
    }

    /// Build from a plain [`TimeDelta`].
    pub fn from_time_delta(delta: TimeDelta, config: DurationConfig) -> Self {
        let parts = DurationParts {
            seconds: delta.num_seconds() as f64,
            microseconds: (delta.subsec_nanos() / 1000) as f64,
            ..Default::default()
        };
        Self::from_parts(parts, config)
    }

    pub fn years(&self) -> i64 {
        self.years
    }

    pub fn months(&self) -> i64 {
        self.months
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn microseconds(&self) -> i64 {
        self.microseconds
    }

    pub fn config(&self) -> DurationConfig {
        self.config
    }

    fn parts(&self) -> DurationParts {
        DurationParts {
            years: self.years as f64,
            months: self.months as f64,
            days: self.days as f64,
            seconds: self.seconds as f64,
            microseconds: self.microseconds as f64,
            ..Default::default()
        }
    }

    fn key(&self) -> (i64, i64, i64, i64, i64) {
        (self.years, self.months, self.days, self.seconds, self.microseconds)
    }

    /// Total length in microseconds, using the configured approximations.
    pub fn total_microseconds(&self) -> f64 {
        let seconds = self.seconds as f64
            + self.days as f64 * SECONDS_PER_DAY as f64
            + self.months as f64 * self.config.days_in_month * SECONDS_PER_DAY as f64
            + self.years as f64 * self.config.days_in_year * SECONDS_PER_DAY as f64;
        seconds * MICROS_PER_SECOND as f64 + self.microseconds as f64
    }

    pub fn to_seconds(&self) -> f64 {
        self.total_microseconds() / MICROS_PER_SECOND as f64
    }

    pub fn to_minutes(&self) -> f64 {
        self.to_seconds() / 60.0
    }

    pub fn to_hours(&self) -> f64 {
        self.to_minutes() / 60.0
    }

    pub fn to_days(&self) -> f64 {
        self.to_hours() / 24.0
    }

    /// Flatten into a [`TimeDelta`], approximating months and years.
    pub fn to_time_delta(&self) -> TimeDelta {
        TimeDelta::microseconds(self.total_microseconds().round() as i64)
    }

    /// Compare by approximate total length, even across configurations.
    pub fn approx_cmp(&self, other: &Self) -> Ordering {
        self.total_microseconds()
            .total_cmp(&other.total_microseconds())
    }
}

impl PartialEq for ExtendedDuration {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ExtendedDuration {}

impl PartialOrd for ExtendedDuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExtendedDuration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for ExtendedDuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Add for ExtendedDuration {
    type Output = ExtendedDuration;

    fn add(self, other: ExtendedDuration) -> ExtendedDuration {
        let (a, b) = (self.parts(), other.parts());
        let parts = DurationParts {
            years: a.years + b.years,
            months: a.months + b.months,
            days: a.days + b.days,
            seconds: a.seconds + b.seconds,
            microseconds: a.microseconds + b.microseconds,
            ..Default::default()
        };
        ExtendedDuration::from_parts(parts, self.config)
    }
}

impl Sub for ExtendedDuration {
    type Output = ExtendedDuration;

    fn sub(self, other: ExtendedDuration) -> ExtendedDuration {
        self + (-other)
    }
}

impl Neg for ExtendedDuration {
    type Output = ExtendedDuration;

    fn neg(self) -> ExtendedDuration {
        let p = self.parts();
        let parts = DurationParts {
            years: -p.years,
            months: -p.months,
            days: -p.days,
            seconds: -p.seconds,
            microseconds: -p.microseconds,
            ..Default::default()
        };
        ExtendedDuration::from_parts(parts, self.config)
    }
}

impl Mul<i64> for ExtendedDuration {
    type Output = ExtendedDuration;

    fn mul(self, factor: i64) -> ExtendedDuration {
        let p = self.parts();
        let k = factor as f64;
        let parts = DurationParts {
            years: p.years * k,
            months: p.months * k,
            days: p.days * k,
            seconds: p.seconds * k,
            microseconds: p.microseconds * k,
            ..Default::default()
        };
        ExtendedDuration::from_parts(parts, self.config)
    }
}

// Mixing with a plain delta goes through the flattened representation.
impl Add<TimeDelta> for ExtendedDuration {
    type Output = ExtendedDuration;

    fn add(self, other: TimeDelta) -> ExtendedDuration {
        ExtendedDuration::from_time_delta(self.to_time_delta() + other, self.config)
    }
}

impl Sub<TimeDelta> for ExtendedDuration {
    type Output = ExtendedDuration;

    fn sub(self, other: TimeDelta) -> ExtendedDuration {
        ExtendedDuration::from_time_delta(self.to_time_delta() - other, self.config)
    }
}

impl fmt::Display for ExtendedDuration {
    /// `1 year, 2 months, 3 days, 2:00:00`; zero renders as `0:00:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn plural(n: i64) -> &'static str {
            if n.abs() == 1 { "" } else { "s" }
        }

        let mut parts = Vec::new();
        if self.years != 0 {
            parts.push(format!("{} year{}", self.years, plural(self.years)));
        }
        if self.months != 0 {
            parts.push(format!("{} month{}", self.months, plural(self.months)));
        }
        if self.days != 0 {
            parts.push(format!("{} day{}", self.days, plural(self.days)));
        }

        let hours = self.seconds / 3600;
        let minutes = self.seconds % 3600 / 60;
        let seconds = self.seconds % 60;
        let mut clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
        if self.microseconds != 0 {
            clock.push_str(&format!(".{:06}", self.microseconds));
        }
        parts.push(clock);

        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> DurationConfig {
        DurationConfig::new(30.0, 365.0).unwrap()
    }

    fn build(parts: DurationParts) -> ExtendedDuration {
        ExtendedDuration::from_parts(parts, flat())
    }

    #[test]
    fn zero_is_all_zero() {
        let zero = ExtendedDuration::zero(DurationConfig::default());
        assert_eq!(zero.to_seconds(), 0.0);
        assert_eq!(zero.to_string(), "0:00:00");
    }

    #[test]
    fn days_carry_into_months() {
        let d = build(DurationParts { days: 30.0, ..Default::default() });
        assert_eq!((d.years(), d.months(), d.days()), (0, 1, 0));
    }

    #[test]
    fn months_carry_into_years() {
        let d = build(DurationParts { years: 2.0, months: 18.0, ..Default::default() });
        assert_eq!((d.years(), d.months()), (3, 6));
    }

    #[test]
    fn fractional_components_cascade() {
        let d = build(DurationParts { years: 1.5, ..Default::default() });
        assert_eq!((d.years(), d.months()), (1, 6));

        let d = build(DurationParts { months: 1.5, ..Default::default() });
        assert_eq!((d.months(), d.days()), (1, 15));

        let d = build(DurationParts { days: 1.5, ..Default::default() });
        assert_eq!((d.days(), d.seconds()), (1, 43_200));
    }

    #[test]
    fn negative_days_borrow_from_months() {
        let d = build(DurationParts { days: -5.0, ..Default::default() });
        assert_eq!((d.years(), d.months(), d.days()), (-1, 11, 25));
    }

    #[test]
    fn arithmetic() {
        let a = build(DurationParts { years: 1.0, months: 2.0, ..Default::default() });
        let b = build(DurationParts { months: 3.0, days: 4.0, ..Default::default() });
        let sum = a + b;
        assert_eq!((sum.years(), sum.months(), sum.days()), (1, 5, 4));

        let a = build(DurationParts { years: 2.0, months: 5.0, ..Default::default() });
        let b = build(DurationParts { years: 1.0, months: 3.0, ..Default::default() });
        let diff = a - b;
        assert_eq!((diff.years(), diff.months()), (1, 2));

        let doubled = build(DurationParts { years: 1.0, months: 2.0, ..Default::default() }) * 2;
        assert_eq!((doubled.years(), doubled.months()), (2, 4));
    }

    #[test]
    fn huge_components_saturate() {
        let d = build(DurationParts { years: 1e18, ..Default::default() });
        assert_eq!(d.years(), i64::MAX.div_euclid(12));

        let one_year = build(DurationParts { years: 1.0, ..Default::default() });
        let scaled = one_year * i64::MAX;
        assert_eq!(scaled.years(), i64::MAX.div_euclid(12));
        assert_eq!(scaled.months(), i64::MAX.rem_euclid(12));

        let negated = -scaled;
        assert!(negated.years() < 0);
        assert!((scaled + scaled).years() > 0);

        let days = build(DurationParts { days: 1e30, ..Default::default() });
        assert!(days.years() > 0);
    }

    #[test]
    fn mixing_with_time_delta() {
        let d = build(DurationParts { days: 5.0, ..Default::default() });
        let later = d + TimeDelta::days(2);
        assert_eq!(later.days(), 7);
        let earlier = d - TimeDelta::days(2);
        assert_eq!(earlier.days(), 3);
        assert_eq!(d.to_time_delta(), TimeDelta::days(5));
    }

    #[test]
    fn from_time_delta_keeps_sub_second_precision() {
        let delta = TimeDelta::seconds(3_661) + TimeDelta::microseconds(250);
        let d = ExtendedDuration::from_time_delta(delta, flat());
        assert_eq!((d.days(), d.seconds(), d.microseconds()), (0, 3_661, 250));
    }

    #[test]
    fn conversions_use_configured_lengths() {
        let d = build(DurationParts { years: 1.0, ..Default::default() });
        assert_eq!(d.to_days(), 365.0);
        let d = ExtendedDuration::from_parts(
            DurationParts { years: 1.0, ..Default::default() },
            DurationConfig::default(),
        );
        assert_eq!(d.to_days(), 365.25);
    }

    #[test]
    fn ordering_and_equality_ignore_config() {
        let two = build(DurationParts { years: 2.0, ..Default::default() });
        let one = ExtendedDuration::from_parts(
            DurationParts { years: 1.0, ..Default::default() },
            DurationConfig::default(),
        );
        assert!(one < two);
        assert_eq!(one.approx_cmp(&two), Ordering::Less);
        assert_eq!(
            one,
            build(DurationParts { months: 12.0, ..Default::default() })
        );
    }

    #[test]
    fn display_pluralizes() {
        let d = build(DurationParts {
            years: 1.0,
            months: 2.0,
            days: 3.0,
            seconds: 7200.0,
            ..Default::default()
        });
        assert_eq!(d.to_string(), "1 year, 2 months, 3 days, 2:00:00");

        let d = build(DurationParts { days: 1.0, microseconds: 5.0, ..Default::default() });
        assert_eq!(d.to_string(), "1 day, 0:00:00.000005");
    }

    #[test]
    fn config_rejects_nonsense() {
        assert!(DurationConfig::new(0.0, 365.0).is_err());
        assert!(DurationConfig::new(30.0, f64::NAN).is_err());
    }

    #[test]
    fn serializes_components_only() {
        let d = build(DurationParts { hours: 2.0, ..Default::default() });
        assert_eq!(
            serde_json::to_string(&d).unwrap(),
            r#"{"years":0,"months":0,"days":0,"seconds":7200,"microseconds":0}"#
        );
    }
}
