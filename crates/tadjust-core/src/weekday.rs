//! Weekday specifications and their normalization.
//!
//! A weekday can be handed to an adjuster in several forms:
//! - [`chrono::Weekday`], the canonical zero-based form (0 = Monday … 6 = Sunday)
//! - [`IsoWeekday`], the one-based ISO 8601 numbering (1 = Monday … 7 = Sunday)
//! - a textual name such as `"SATURDAY"` (case-insensitive)
//! - a raw zero-based integer
//!
//! Every form is normalized to [`chrono::Weekday`] before any arithmetic.
//! Raw integers are range-checked; out-of-range values are rejected.

use std::fmt;

use chrono::Weekday;

use crate::error::{AdjustError, Result};

/// Canonical weekday names indexed by zero-based weekday number.
///
/// Shared by name parsing and error message rendering.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase name of a weekday, as used in error messages.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Weekday from its zero-based number (0 = Monday … 6 = Sunday).
pub fn from_zero_based(index: i64) -> Result<Weekday> {
    usize::try_from(index)
        .ok()
        .and_then(|i| WEEKDAYS.get(i).copied())
        .ok_or_else(|| {
            AdjustError::InvalidArgument(format!(
                "weekday index must be between 0 and 6, but is {}",
                index
            ))
        })
}

/// Weekday from its ISO 8601 number (1 = Monday … 7 = Sunday).
pub fn from_iso(number: i64) -> Result<Weekday> {
    IsoWeekday::from_number(number).map(Weekday::from)
}

/// Weekday from its English name, ignoring case and surrounding whitespace.
pub fn from_name(name: &str) -> Result<Weekday> {
    let trimmed = name.trim();
    WEEKDAY_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(trimmed))
        .map(|i| WEEKDAYS[i])
        .ok_or_else(|| {
            AdjustError::InvalidArgument(format!(
                "Unknown weekday: '{}'. Expected one of: {}",
                name,
                WEEKDAY_NAMES.join(", ")
            ))
        })
}

/// A weekday numbered the ISO 8601 way, 1 = Monday … 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IsoWeekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl IsoWeekday {
    /// The ISO number of this weekday.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// ISO weekday from its number, rejecting anything outside 1..=7.
    pub fn from_number(number: i64) -> Result<Self> {
        match number {
            1 => Ok(IsoWeekday::Monday),
            2 => Ok(IsoWeekday::Tuesday),
            3 => Ok(IsoWeekday::Wednesday),
            4 => Ok(IsoWeekday::Thursday),
            5 => Ok(IsoWeekday::Friday),
            6 => Ok(IsoWeekday::Saturday),
            7 => Ok(IsoWeekday::Sunday),
            _ => Err(AdjustError::InvalidArgument(format!(
                "ISO weekday must be between 1 and 7, but is {}",
                number
            ))),
        }
    }
}

// Crosswalk by day identity, not by subtracting one from the ISO number.
impl From<IsoWeekday> for Weekday {
    fn from(iso: IsoWeekday) -> Self {
        match iso {
            IsoWeekday::Monday => Weekday::Mon,
            IsoWeekday::Tuesday => Weekday::Tue,
            IsoWeekday::Wednesday => Weekday::Wed,
            IsoWeekday::Thursday => Weekday::Thu,
            IsoWeekday::Friday => Weekday::Fri,
            IsoWeekday::Saturday => Weekday::Sat,
            IsoWeekday::Sunday => Weekday::Sun,
        }
    }
}

impl fmt::Display for IsoWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", weekday_name(Weekday::from(*self)))
    }
}

/// Any accepted way of naming a weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekdaySpec {
    /// Canonical zero-based weekday.
    Day(Weekday),
    /// ISO-numbered weekday.
    Iso(IsoWeekday),
    /// Textual name, matched case-insensitively.
    Name(String),
    /// Raw zero-based number.
    Index(i64),
}

impl WeekdaySpec {
    /// Normalize to the canonical weekday.
    ///
    /// Idempotent: normalizing a [`WeekdaySpec::Day`] returns its weekday
    /// unchanged.
    pub fn normalize(&self) -> Result<Weekday> {
        match self {
            WeekdaySpec::Day(weekday) => Ok(*weekday),
            WeekdaySpec::Iso(iso) => Ok(Weekday::from(*iso)),
            WeekdaySpec::Name(name) => from_name(name),
            WeekdaySpec::Index(index) => from_zero_based(*index),
        }
    }
}

impl fmt::Display for WeekdaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekdaySpec::Day(weekday) => write!(f, "{}", weekday_name(*weekday)),
            WeekdaySpec::Iso(iso) => write!(f, "{} (iso {})", iso, iso.number()),
            WeekdaySpec::Name(name) => write!(f, "{}", name),
            WeekdaySpec::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<Weekday> for WeekdaySpec {
    fn from(weekday: Weekday) -> Self {
        WeekdaySpec::Day(weekday)
    }
}

impl From<IsoWeekday> for WeekdaySpec {
    fn from(iso: IsoWeekday) -> Self {
        WeekdaySpec::Iso(iso)
    }
}

impl From<&str> for WeekdaySpec {
    fn from(name: &str) -> Self {
        WeekdaySpec::Name(name.to_string())
    }
}

impl From<String> for WeekdaySpec {
    fn from(name: String) -> Self {
        WeekdaySpec::Name(name)
    }
}

impl From<i64> for WeekdaySpec {
    fn from(index: i64) -> Self {
        WeekdaySpec::Index(index)
    }
}

impl From<i32> for WeekdaySpec {
    fn from(index: i32) -> Self {
        WeekdaySpec::Index(index.into())
    }
}

impl From<u8> for WeekdaySpec {
    fn from(index: u8) -> Self {
        WeekdaySpec::Index(index.into())
    }
}

impl From<&WeekdaySpec> for WeekdaySpec {
    fn from(spec: &WeekdaySpec) -> Self {
        spec.clone()
    }
}
