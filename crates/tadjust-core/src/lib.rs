//! # tadjust-core
//!
//! Weekday-relative date adjusters for Rust.
//!
//! This library answers questions like "the next Saturday after this date",
//! "the third Tuesday of this month", or "the last Friday of next year", for
//! a single date or a whole collection of them.
//!
//! ## Features
//!
//! - **Flexible weekdays**: pass a [`chrono::Weekday`], an ISO-numbered
//!   [`IsoWeekday`], a name like `"SATURDAY"`, or a zero-based number.
//! - **Collections**: every adjuster in [`adjuster`] accepts one value or a
//!   `Vec`, `BTreeSet`, boxed slice, array, or `VecDeque`, and returns the
//!   same shape.
//! - **Bounded queries**: asking for the fifth Saturday of a month that has
//!   only four is an error, never a date in the following month.
//! - **Calendar and clock helpers**: week/month/year boundaries, day-of-year
//!   conversions, time-of-day rounding, and a duration type that counts
//!   months and years.
//! - **Named operations**: [`Operation`] addresses every date adjuster by
//!   name for command-line and other dynamic callers.
//!
//! ## Example
//!
//! ```rust
//! use tadjust_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
//!
//! // The next Saturday after Thursday, 2024-06-13.
//! let saturday = resolver::next("saturday", date).unwrap();
//! assert_eq!(saturday, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
//!
//! // The same question for several dates at once.
//! let dates = vec![date, saturday];
//! let out = adjuster::next(Weekday::Sat, dates).unwrap();
//! assert_eq!(out.len(), 2);
//!
//! // June 2024 has no sixth Saturday.
//! assert!(resolver::nth_of_month(Weekday::Sat, date, 6).is_err());
//! ```

pub mod adjuster;
pub mod calendar;
pub mod dispatch;
pub mod duration;
pub mod error;
pub mod models;
pub mod ops;
pub mod resolver;
pub mod time_of_day;
pub mod weekday;

// Re-export commonly used types at the crate root
pub use calendar::Temporal;
pub use dispatch::{Batch, ContainerKind, Target, elementwise};
pub use duration::{DurationConfig, DurationParts, ExtendedDuration};
pub use error::{AdjustError, Result};
pub use models::{AdjustmentRecord, BatchReport, OperationInfo, RoundReport, TimeDifferenceReport};
pub use ops::{Adjusted, Operation, OperationArgs, Param};
pub use time_of_day::TimeOfDay;
pub use weekday::{IsoWeekday, WeekdaySpec};

/// Prelude module for convenient imports.
///
/// ```
/// use tadjust_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dispatch::{Batch, ContainerKind, Target};
    pub use crate::duration::{DurationConfig, DurationParts, ExtendedDuration};
    pub use crate::error::{AdjustError, Result};
    pub use crate::ops::{Adjusted, Operation, OperationArgs};
    pub use crate::weekday::{IsoWeekday, WeekdaySpec};
    pub use crate::{Temporal, TimeOfDay, adjuster, resolver};
    pub use chrono::Weekday;
}
