//! Named operations.
//!
//! Every date-bearing adjuster is addressable by its snake_case name, with
//! its arguments supplied loosely through [`OperationArgs`]. This is the
//! surface the command-line tool drives.
//!
//! Arguments are bound before anything else happens. A missing required
//! argument, an argument the operation does not take, or an unknown
//! operation name fails with [`AdjustError::Binding`] and no date is ever
//! looked at.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;
use tracing::debug;

use crate::calendar::{self, Temporal};
use crate::dispatch::{Target, elementwise};
use crate::error::{AdjustError, Result};
use crate::resolver;
use crate::weekday::WeekdaySpec;

/// A parameter an operation may require besides its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Param {
    Weekday,
    N,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Weekday => write!(f, "weekday"),
            Param::N => write!(f, "n"),
        }
    }
}

macro_rules! operations {
    ($($variant:ident => $name:literal, [$($param:ident),*], $about:literal;)*) => {
        /// A date-bearing operation addressable by name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $($variant,)*
        }

        impl Operation {
            /// Every operation, in listing order.
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }

            /// Parameters the operation requires, besides the date.
            pub fn params(self) -> &'static [Param] {
                match self {
                    $(Operation::$variant => &[$(Param::$param),*],)*
                }
            }

            /// One-line summary for listings.
            pub fn description(self) -> &'static str {
                match self {
                    $(Operation::$variant => $about,)*
                }
            }
        }
    };
}

operations! {
    Next => "next", [Weekday], "next weekday strictly after the date";
    NextOrSame => "next_or_same", [Weekday], "next weekday on or after the date";
    Last => "last", [Weekday], "last weekday strictly before the date";
    LastOrSame => "last_or_same", [Weekday], "last weekday on or before the date";
    FirstOfMonth => "first_of_month", [Weekday], "first weekday of the month";
    FirstOfNextMonth => "first_of_next_month", [Weekday], "first weekday of the next month";
    FirstOfLastMonth => "first_of_last_month", [Weekday], "first weekday of the previous month";
    LastOfMonth => "last_of_month", [Weekday], "last weekday of the month";
    LastOfNextMonth => "last_of_next_month", [Weekday], "last weekday of the next month";
    LastOfLastMonth => "last_of_last_month", [Weekday], "last weekday of the previous month";
    FirstOfYear => "first_of_year", [Weekday], "first weekday of the year";
    FirstOfNextYear => "first_of_next_year", [Weekday], "first weekday of the next year";
    FirstOfLastYear => "first_of_last_year", [Weekday], "first weekday of the previous year";
    LastOfYear => "last_of_year", [Weekday], "last weekday of the year";
    LastOfNextYear => "last_of_next_year", [Weekday], "last weekday of the next year";
    LastOfLastYear => "last_of_last_year", [Weekday], "last weekday of the previous year";
    NthFromDate => "nth_from_date", [Weekday, N], "n-th weekday counted from the date";
    NthOfMonth => "nth_of_month", [Weekday, N], "n-th weekday of the month";
    NthOfYear => "nth_of_year", [Weekday, N], "n-th weekday of the year";
    WhichOfMonth => "which_of_month", [Weekday], "occurrence number of the date within its month";
    WhichOfYear => "which_of_year", [Weekday], "occurrence number of the date within its year";
    FirstDayOfWeek => "first_day_of_week", [], "Monday of the week";
    FirstDayOfNextWeek => "first_day_of_next_week", [], "Monday of the next week";
    FirstDayOfLastWeek => "first_day_of_last_week", [], "Monday of the previous week";
    LastDayOfWeek => "last_day_of_week", [], "Sunday of the week";
    LastDayOfNextWeek => "last_day_of_next_week", [], "Sunday of the next week";
    LastDayOfLastWeek => "last_day_of_last_week", [], "Sunday of the previous week";
    FirstDayOfMonth => "first_day_of_month", [], "first day of the month";
    FirstDayOfNextMonth => "first_day_of_next_month", [], "first day of the next month";
    FirstDayOfLastMonth => "first_day_of_last_month", [], "first day of the previous month";
    LastDayOfMonth => "last_day_of_month", [], "last day of the month";
    LastDayOfNextMonth => "last_day_of_next_month", [], "last day of the next month";
    LastDayOfLastMonth => "last_day_of_last_month", [], "last day of the previous month";
    FirstDayOfYear => "first_day_of_year", [], "January 1st of the year";
    FirstDayOfNextYear => "first_day_of_next_year", [], "January 1st of the next year";
    FirstDayOfLastYear => "first_day_of_last_year", [], "January 1st of the previous year";
    LastDayOfYear => "last_day_of_year", [], "December 31st of the year";
    LastDayOfNextYear => "last_day_of_next_year", [], "December 31st of the next year";
    LastDayOfLastYear => "last_day_of_last_year", [], "December 31st of the previous year";
    IntToDayOfYear => "int_to_day_of_year", [N], "n-th day of the year";
    IntToDayOfMonth => "int_to_day_of_month", [N], "n-th day of the month";
    DateToIntOfYear => "date_to_int_of_year", [], "day number within the year";
    DateToIntOfMonth => "date_to_int_of_month", [], "day number within the month";
    DayOfYear => "day_of_year", [], "day number within the year";
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = AdjustError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| AdjustError::Binding(format!("unknown operation '{}'", s)))
    }
}

/// Loosely supplied arguments for an [`Operation`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationArgs {
    pub weekday: Option<WeekdaySpec>,
    pub n: Option<i64>,
}

impl OperationArgs {
    pub fn with_weekday(mut self, weekday: impl Into<WeekdaySpec>) -> Self {
        self.weekday = Some(weekday.into());
        self
    }

    pub fn with_n(mut self, n: i64) -> Self {
        self.n = Some(n);
        self
    }
}

/// The outcome of an operation on one date: another date, or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Adjusted<T> {
    Temporal(T),
    Ordinal(u32),
}

impl<T: fmt::Display> fmt::Display for Adjusted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjusted::Temporal(value) => write!(f, "{}", value),
            Adjusted::Ordinal(n) => write!(f, "{}", n),
        }
    }
}

struct Bound {
    op: Operation,
    weekday: Option<Weekday>,
    n: Option<i64>,
}

impl Bound {
    fn weekday(&self) -> Result<Weekday> {
        self.weekday.ok_or_else(|| missing(self.op, Param::Weekday))
    }

    fn n(&self) -> Result<i64> {
        self.n.ok_or_else(|| missing(self.op, Param::N))
    }
}

fn missing(op: Operation, param: Param) -> AdjustError {
    AdjustError::Binding(format!("{}() missing required argument '{}'", op, param))
}

impl Operation {
    fn check(self, param: Param, supplied: bool) -> Result<()> {
        match (self.params().contains(&param), supplied) {
            (true, false) => Err(missing(self, param)),
            (false, true) => Err(AdjustError::Binding(format!(
                "{}() got an unexpected argument '{}'",
                self, param
            ))),
            _ => Ok(()),
        }
    }

    fn bind(self, args: &OperationArgs) -> Result<Bound> {
        self.check(Param::Weekday, args.weekday.is_some())?;
        self.check(Param::N, args.n.is_some())?;
        let weekday = args.weekday.as_ref().map(WeekdaySpec::normalize).transpose()?;
        Ok(Bound {
            op: self,
            weekday,
            n: args.n,
        })
    }

    /// Check that `args` fit this operation without touching any date.
    pub fn validate(self, args: &OperationArgs) -> Result<()> {
        self.bind(args).map(|_| ())
    }

    /// Bind `args`, then apply the operation to every date in `target`.
    pub fn invoke<T: Temporal>(
        self,
        args: &OperationArgs,
        target: impl Into<Target<T>>,
    ) -> Result<Target<Adjusted<T>>> {
        let bound = self.bind(args)?;
        debug!(op = %self, weekday = ?bound.weekday, n = ?bound.n, "invoking operation");
        elementwise(target, |date| self.apply(&bound, date))
    }

    fn apply<T: Temporal>(self, bound: &Bound, date: T) -> Result<Adjusted<T>> {
        use Adjusted::{Ordinal, Temporal as Date};

        Ok(match self {
            Operation::Next => Date(resolver::next(bound.weekday()?, date)?),
            Operation::NextOrSame => Date(resolver::next_or_same(bound.weekday()?, date)?),
            Operation::Last => Date(resolver::last(bound.weekday()?, date)?),
            Operation::LastOrSame => Date(resolver::last_or_same(bound.weekday()?, date)?),
            Operation::FirstOfMonth => Date(resolver::first_of_month(bound.weekday()?, date)?),
            Operation::FirstOfNextMonth => {
                Date(resolver::first_of_next_month(bound.weekday()?, date)?)
            }
            Operation::FirstOfLastMonth => {
                Date(resolver::first_of_last_month(bound.weekday()?, date)?)
            }
            Operation::LastOfMonth => Date(resolver::last_of_month(bound.weekday()?, date)?),
            Operation::LastOfNextMonth => {
                Date(resolver::last_of_next_month(bound.weekday()?, date)?)
            }
            Operation::LastOfLastMonth => {
                Date(resolver::last_of_last_month(bound.weekday()?, date)?)
            }
            Operation::FirstOfYear => Date(resolver::first_of_year(bound.weekday()?, date)?),
            Operation::FirstOfNextYear => {
                Date(resolver::first_of_next_year(bound.weekday()?, date)?)
            }
            Operation::FirstOfLastYear => {
                Date(resolver::first_of_last_year(bound.weekday()?, date)?)
            }
            Operation::LastOfYear => Date(resolver::last_of_year(bound.weekday()?, date)?),
            Operation::LastOfNextYear => Date(resolver::last_of_next_year(bound.weekday()?, date)?),
            Operation::LastOfLastYear => Date(resolver::last_of_last_year(bound.weekday()?, date)?),
            Operation::NthFromDate => {
                Date(resolver::nth_from_date(bound.weekday()?, date, bound.n()?)?)
            }
            Operation::NthOfMonth => {
                Date(resolver::nth_of_month(bound.weekday()?, date, bound.n()?)?)
            }
            Operation::NthOfYear => Date(resolver::nth_of_year(bound.weekday()?, date, bound.n()?)?),
            Operation::WhichOfMonth => Ordinal(resolver::which_of_month(bound.weekday()?, date)?),
            Operation::WhichOfYear => Ordinal(resolver::which_of_year(bound.weekday()?, date)?),
            Operation::FirstDayOfWeek => Date(calendar::first_day_of_week(date)?),
            Operation::FirstDayOfNextWeek => Date(calendar::first_day_of_next_week(date)?),
            Operation::FirstDayOfLastWeek => Date(calendar::first_day_of_last_week(date)?),
            Operation::LastDayOfWeek => Date(calendar::last_day_of_week(date)?),
            Operation::LastDayOfNextWeek => Date(calendar::last_day_of_next_week(date)?),
            Operation::LastDayOfLastWeek => Date(calendar::last_day_of_last_week(date)?),
            Operation::FirstDayOfMonth => Date(calendar::first_day_of_month(date)?),
            Operation::FirstDayOfNextMonth => Date(calendar::first_day_of_next_month(date)?),
            Operation::FirstDayOfLastMonth => Date(calendar::first_day_of_last_month(date)?),
            Operation::LastDayOfMonth => Date(calendar::last_day_of_month(date)?),
            Operation::LastDayOfNextMonth => Date(calendar::last_day_of_next_month(date)?),
            Operation::LastDayOfLastMonth => Date(calendar::last_day_of_last_month(date)?),
            Operation::FirstDayOfYear => Date(calendar::first_day_of_year(date)?),
            Operation::FirstDayOfNextYear => Date(calendar::first_day_of_next_year(date)?),
            Operation::FirstDayOfLastYear => Date(calendar::first_day_of_last_year(date)?),
            Operation::LastDayOfYear => Date(calendar::last_day_of_year(date)?),
            Operation::LastDayOfNextYear => Date(calendar::last_day_of_next_year(date)?),
            Operation::LastDayOfLastYear => Date(calendar::last_day_of_last_year(date)?),
            Operation::IntToDayOfYear => Date(calendar::int_to_day_of_year(date, bound.n()?)?),
            Operation::IntToDayOfMonth => Date(calendar::int_to_day_of_month(date, bound.n()?)?),
            Operation::DateToIntOfYear => Ordinal(calendar::date_to_int_of_year(date)),
            Operation::DateToIntOfMonth => Ordinal(calendar::date_to_int_of_month(date)),
            Operation::DayOfYear => Ordinal(calendar::day_of_year(date)),
        })
    }
}
