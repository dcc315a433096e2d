//! Serializable result records.
//!
//! - [`AdjustmentRecord`] - one input and its adjusted value
//! - [`BatchReport`] - a whole batch adjusted in one call
//! - [`OperationInfo`] - name and parameters of an [`Operation`]
//! - [`TimeDifferenceReport`] - forward clock distance between two times
//! - [`RoundReport`] - a rounded time-of-day

use chrono::NaiveTime;
use serde::Serialize;

use crate::calendar::Temporal;
use crate::dispatch::{Batch, ContainerKind, Target};
use crate::duration::{DurationConfig, ExtendedDuration};
use crate::error::Result;
use crate::ops::{Adjusted, Operation, OperationArgs, Param};
use crate::time_of_day::{self, TimeOfDay};

/// One input value and the result of an operation on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentRecord<T> {
    pub input: T,
    pub op: &'static str,
    pub result: Adjusted<T>,
}

impl<T: Temporal> AdjustmentRecord<T> {
    /// Run `op` on a single value.
    pub fn adjust(op: Operation, args: &OperationArgs, input: T) -> Result<Self> {
        let result = match op.invoke(args, Target::One(input))? {
            Target::One(result) => result,
            Target::Many(_) => unreachable!("a single value maps to a single value"),
        };
        Ok(Self {
            input,
            op: op.name(),
            result,
        })
    }
}

/// A batch of inputs and the batch of results, both in the same shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport<T> {
    pub op: &'static str,
    pub container: ContainerKind,
    pub input: Batch<T>,
    pub result: Batch<Adjusted<T>>,
}

impl<T: Temporal> BatchReport<T> {
    /// Collect `inputs` into a batch of shape `container` and run `op` on it.
    pub fn adjust(
        op: Operation,
        args: &OperationArgs,
        container: ContainerKind,
        inputs: Vec<T>,
    ) -> Result<Self> {
        let input = Batch::from_vec(container, inputs);
        let result = match op.invoke(args, Target::Many(input.clone()))? {
            Target::Many(result) => result,
            Target::One(_) => unreachable!("a batch keeps its shape"),
        };
        Ok(Self {
            op: op.name(),
            container,
            input,
            result,
        })
    }
}

/// Listing entry for a named operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    pub name: &'static str,
    pub params: &'static [Param],
    pub description: &'static str,
}

impl From<Operation> for OperationInfo {
    fn from(op: Operation) -> Self {
        Self {
            name: op.name(),
            params: op.params(),
            description: op.description(),
        }
    }
}

/// Forward clock distance from one time to another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeDifferenceReport {
    pub from: NaiveTime,
    pub to: NaiveTime,
    pub duration: ExtendedDuration,
    /// Human-readable form, e.g. `4:00:00`.
    pub display: String,
    pub seconds: f64,
}

impl TimeDifferenceReport {
    pub fn new(from: NaiveTime, to: NaiveTime, config: DurationConfig) -> Self {
        let duration = time_of_day::time_difference(from, to, config);
        Self {
            from,
            to,
            display: duration.to_string(),
            seconds: duration.to_seconds(),
            duration,
        }
    }
}

/// A time-of-day rounded to a multiple of some seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundReport<T> {
    pub input: T,
    pub round_to_secs: u32,
    pub result: T,
}

impl<T: TimeOfDay> RoundReport<T> {
    pub fn new(input: T, round_to_secs: u32) -> Result<Self> {
        Ok(Self {
            input,
            round_to_secs,
            result: time_of_day::round_time(input, round_to_secs)?,
        })
    }
}
