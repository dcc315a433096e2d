//! Elementwise dispatch over single values and collections.
//!
//! Every adjuster is written against a single value. [`elementwise`] lifts
//! such a function over a [`Target`], which is either one value or a
//! [`Batch`] of them. A batch is rebuilt in the same container shape it
//! arrived in:
//!
//! | Input shape            | Output shape           |
//! |------------------------|------------------------|
//! | `Vec<T>`               | `Vec<R>`               |
//! | `BTreeSet<T>`          | `BTreeSet<R>`          |
//! | `Box<[T]>` / `[T; N]`  | `Box<[R]>`             |
//! | `VecDeque<T>`          | `VecDeque<R>`          |
//!
//! Elements are processed in iteration order and the first failure aborts
//! the whole call; no partial results are returned.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::trace;

use crate::error::{AdjustError, Result};

/// The container shapes a [`Batch`] can take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// Growable ordered sequence.
    #[default]
    List,
    /// Ordered set; duplicates collapse and iteration follows value order.
    Set,
    /// Fixed-length immutable sequence.
    Fixed,
    /// Double-ended queue.
    Deque,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::List => write!(f, "list"),
            ContainerKind::Set => write!(f, "set"),
            ContainerKind::Fixed => write!(f, "fixed"),
            ContainerKind::Deque => write!(f, "deque"),
        }
    }
}

impl FromStr for ContainerKind {
    type Err = AdjustError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "list" => Ok(ContainerKind::List),
            "set" => Ok(ContainerKind::Set),
            "fixed" => Ok(ContainerKind::Fixed),
            "deque" => Ok(ContainerKind::Deque),
            _ => Err(AdjustError::InvalidArgument(format!(
                "Unknown container: '{}'. Expected 'list', 'set', 'fixed', or 'deque'",
                s
            ))),
        }
    }
}

/// A homogeneous collection of values in one of the supported shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Batch<T> {
    List(Vec<T>),
    Set(BTreeSet<T>),
    Fixed(Box<[T]>),
    Deque(VecDeque<T>),
}

impl<T> Batch<T> {
    /// Collect `items` into a batch of the given shape.
    pub fn from_vec(kind: ContainerKind, items: Vec<T>) -> Self
    where
        T: Ord,
    {
        match kind {
            ContainerKind::List => Batch::List(items),
            ContainerKind::Set => Batch::Set(items.into_iter().collect()),
            ContainerKind::Fixed => Batch::Fixed(items.into_boxed_slice()),
            ContainerKind::Deque => Batch::Deque(items.into()),
        }
    }

    /// The container shape of this batch.
    pub fn kind(&self) -> ContainerKind {
        match self {
            Batch::List(_) => ContainerKind::List,
            Batch::Set(_) => ContainerKind::Set,
            Batch::Fixed(_) => ContainerKind::Fixed,
            Batch::Deque(_) => ContainerKind::Deque,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Batch::List(items) => items.len(),
            Batch::Set(items) => items.len(),
            Batch::Fixed(items) => items.len(),
            Batch::Deque(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The elements in iteration order.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Batch::List(items) => items,
            Batch::Set(items) => items.into_iter().collect(),
            Batch::Fixed(items) => items.into_vec(),
            Batch::Deque(items) => items.into(),
        }
    }

    /// Apply `f` to every element in iteration order, rebuilding the same
    /// shape. Stops at the first error.
    pub fn try_map<R, F>(self, f: F) -> Result<Batch<R>>
    where
        R: Ord,
        F: FnMut(T) -> Result<R>,
    {
        match self {
            Batch::List(items) => items
                .into_iter()
                .map(f)
                .collect::<Result<Vec<R>>>()
                .map(Batch::List),
            Batch::Set(items) => items
                .into_iter()
                .map(f)
                .collect::<Result<BTreeSet<R>>>()
                .map(Batch::Set),
            Batch::Fixed(items) => items
                .into_vec()
                .into_iter()
                .map(f)
                .collect::<Result<Vec<R>>>()
                .map(|mapped| Batch::Fixed(mapped.into_boxed_slice())),
            Batch::Deque(items) => items
                .into_iter()
                .map(f)
                .collect::<Result<VecDeque<R>>>()
                .map(Batch::Deque),
        }
    }
}

/// Either a single value or a batch of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Target<T> {
    One(T),
    Many(Batch<T>),
}

impl<T> Target<T> {
    /// The single value, or `None` for a batch.
    pub fn into_one(self) -> Option<T> {
        match self {
            Target::One(value) => Some(value),
            Target::Many(_) => None,
        }
    }

    /// The batch, or `None` for a single value.
    pub fn into_batch(self) -> Option<Batch<T>> {
        match self {
            Target::One(_) => None,
            Target::Many(batch) => Some(batch),
        }
    }

    /// All values in iteration order; a single value becomes a one-element vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Target::One(value) => vec![value],
            Target::Many(batch) => batch.into_vec(),
        }
    }

    /// The container shape, or `None` for a single value.
    pub fn kind(&self) -> Option<ContainerKind> {
        match self {
            Target::One(_) => None,
            Target::Many(batch) => Some(batch.kind()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Target::One(_) => 1,
            Target::Many(batch) => batch.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Apply `f` to a single value, or to every element of a batch.
///
/// A batch result has the same shape as the input batch and keeps
/// positional correspondence: the i-th output comes from the i-th input.
/// If `f` fails on any element the whole call fails with that error.
pub fn elementwise<T, R, F>(target: impl Into<Target<T>>, mut f: F) -> Result<Target<R>>
where
    R: Ord,
    F: FnMut(T) -> Result<R>,
{
    match target.into() {
        Target::One(value) => f(value).map(Target::One),
        Target::Many(batch) => {
            trace!(container = %batch.kind(), len = batch.len(), "dispatching elementwise");
            batch.try_map(f).map(Target::Many)
        }
    }
}

impl From<NaiveDate> for Target<NaiveDate> {
    fn from(value: NaiveDate) -> Self {
        Target::One(value)
    }
}

impl From<NaiveDateTime> for Target<NaiveDateTime> {
    fn from(value: NaiveDateTime) -> Self {
        Target::One(value)
    }
}

impl From<NaiveTime> for Target<NaiveTime> {
    fn from(value: NaiveTime) -> Self {
        Target::One(value)
    }
}

impl From<f64> for Target<f64> {
    fn from(value: f64) -> Self {
        Target::One(value)
    }
}

impl<T> From<Batch<T>> for Target<T> {
    fn from(batch: Batch<T>) -> Self {
        Target::Many(batch)
    }
}

impl<T> From<Vec<T>> for Target<T> {
    fn from(items: Vec<T>) -> Self {
        Target::Many(Batch::List(items))
    }
}

impl<T> From<BTreeSet<T>> for Target<T> {
    fn from(items: BTreeSet<T>) -> Self {
        Target::Many(Batch::Set(items))
    }
}

impl<T> From<Box<[T]>> for Target<T> {
    fn from(items: Box<[T]>) -> Self {
        Target::Many(Batch::Fixed(items))
    }
}

impl<T, const N: usize> From<[T; N]> for Target<T> {
    fn from(items: [T; N]) -> Self {
        Target::Many(Batch::Fixed(Box::new(items)))
    }
}

impl<T> From<VecDeque<T>> for Target<T> {
    fn from(items: VecDeque<T>) -> Self {
        Target::Many(Batch::Deque(items))
    }
}
