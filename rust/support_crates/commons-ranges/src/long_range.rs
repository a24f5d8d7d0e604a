//! A plain pair of optional `i64` bounds.

use std::fmt;

use crate::range::{Range, i64_range, write_bound};

/// A pair of optional `i64` bounds without interval logic of its own.
///
/// Use [`LongRange::to_range`] to get containment and intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongRange {
    start: Option<i64>,
    end: Option<i64>,
}

impl LongRange {
    pub fn new(start: Option<i64>, end: Option<i64>) -> LongRange {
        LongRange { start, end }
    }

    pub fn start(&self) -> Option<i64> {
        self.start
    }

    pub fn set_start(&mut self, start: Option<i64>) {
        self.start = start;
    }

    pub fn end(&self) -> Option<i64> {
        self.end
    }

    pub fn set_end(&mut self, end: Option<i64>) {
        self.end = end;
    }

    /// Returns `true` when both bounds are absent.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// The equivalent [`Range`] limited to `i64::MIN..=i64::MAX`.
    pub fn to_range(&self) -> Range<i64> {
        i64_range(self.start, self.end)
    }
}

impl fmt::Display for LongRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LongRange [start=")?;
        write_bound(f, self.start.as_ref())?;
        f.write_str(", end=")?;
        write_bound(f, self.end.as_ref())?;
        f.write_str("]")
    }
}
