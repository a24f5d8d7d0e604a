//! Closed intervals of UTC instants.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use chrono::{DateTime, SecondsFormat, Utc};
use commons_core::{Result, verify_arg};

use crate::range::{Range, write_bound};

pub const MILLISECONDS_PER_SECOND: i64 = 1000;
pub const MILLISECONDS_PER_MINUTE: i64 = MILLISECONDS_PER_SECOND * 60;
pub const MILLISECONDS_PER_HOUR: i64 = MILLISECONDS_PER_MINUTE * 60;
pub const MILLISECONDS_PER_DAY: i64 = MILLISECONDS_PER_HOUR * 24;

/// A closed interval of instants with optional bounds.
///
/// The absolute limits default to the Unix epoch and to the largest instant
/// representable by [`DateTime<Utc>`]. Containment and intersection delegate to
/// [`Range`] over the normalized bounds; durations keep the sign of the
/// bounds as given (see [`calculate_duration`](Self::calculate_duration)).
///
/// Instants are `Copy`, so getters hand out values and the range can never be
/// altered through something it returned.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(skip, default = "DateRange::min_date"))]
    min_value: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(skip, default = "DateRange::max_date"))]
    max_value: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> DateRange {
        DateRange::with_limits(start, end, Self::min_date(), Self::max_date())
    }

    pub fn unbounded() -> DateRange {
        DateRange::new(None, None)
    }

    /// Creates a range whose absent bounds resolve to `min_value`/`max_value`
    /// instead of the default limits.
    pub fn with_limits(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        min_value: DateTime<Utc>,
        max_value: DateTime<Utc>,
    ) -> DateRange {
        DateRange {
            start,
            end,
            min_value,
            max_value,
        }
    }

    /// The default lower limit: the Unix epoch.
    pub fn min_date() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    /// The default upper limit: the latest representable instant.
    pub fn max_date() -> DateTime<Utc> {
        DateTime::<Utc>::MAX_UTC
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn set_start(&mut self, start: Option<DateTime<Utc>>) {
        self.start = start;
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn set_end(&mut self, end: Option<DateTime<Utc>>) {
        self.end = end;
    }

    pub fn min_value(&self) -> DateTime<Utc> {
        self.min_value
    }

    pub fn max_value(&self) -> DateTime<Utc> {
        self.max_value
    }

    /// Returns `true` when both bounds are absent.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// The equivalent generic range, ordered chronologically.
    pub fn as_range(&self) -> Range<DateTime<Utc>> {
        Range::with_bounds(
            DateTime::<Utc>::cmp,
            self.start,
            self.end,
            self.min_value,
            self.max_value,
        )
    }

    /// Returns a new range with resolved, ordered bounds and the same limits.
    pub fn normalize(&self) -> DateRange {
        let normalized = self.as_range().normalize();
        DateRange::with_limits(
            normalized.start().copied(),
            normalized.end().copied(),
            self.min_value,
            self.max_value,
        )
    }

    /// Returns `true` if `x` lies within the normalized range, both ends inclusive.
    pub fn contains(&self, x: Option<DateTime<Utc>>) -> bool {
        self.as_range().contains(x.as_ref())
    }

    /// Tests whether two ranges overlap; touching at a boundary counts.
    pub fn intersect(a: Option<&DateRange>, b: Option<&DateRange>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a.intersects(b),
            _ => false,
        }
    }

    /// Method form of [`DateRange::intersect`].
    pub fn intersects(&self, other: &DateRange) -> bool {
        self.as_range().intersects(&other.as_range())
    }

    pub fn duration_in_days(&self) -> i64 {
        self.duration_in(MILLISECONDS_PER_DAY)
    }

    pub fn duration_in_hours(&self) -> i64 {
        self.duration_in(MILLISECONDS_PER_HOUR)
    }

    pub fn duration_in_minutes(&self) -> i64 {
        self.duration_in(MILLISECONDS_PER_MINUTE)
    }

    pub fn duration_in_seconds(&self) -> i64 {
        self.duration_in(MILLISECONDS_PER_SECOND)
    }

    pub fn duration_in_milliseconds(&self) -> i64 {
        self.duration_in(1)
    }

    /// Counts whole `period_millis` periods in the range, both ends inclusive.
    ///
    /// The count is `sign * (end - start + 1) / period_millis` over the
    /// normalized bounds, where `sign` is `-1` if the bounds as given have
    /// `start` after `end` and `1` otherwise. Returns `0` when either bound
    /// is absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `period_millis` is not positive.
    pub fn calculate_duration(&self, period_millis: i64) -> Result<i64> {
        verify_arg!(period_millis, period_millis > 0);
        Ok(self.duration_in(period_millis))
    }

    fn duration_in(&self, period_millis: i64) -> i64 {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return 0;
        };
        let sign = if start > end { -1 } else { 1 };
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        let millis = end.timestamp_millis() - start.timestamp_millis() + 1;
        sign * millis / period_millis
    }
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::unbounded()
    }
}

impl PartialEq for DateRange {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for DateRange {}

impl Hash for DateRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl From<DateRange> for Range<DateTime<Utc>> {
    fn from(range: DateRange) -> Self {
        range.as_range()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iso = |d: DateTime<Utc>| d.to_rfc3339_opts(SecondsFormat::Millis, true);
        f.write_str("DateRange [start=")?;
        write_bound(f, self.start.map(iso).as_ref())?;
        f.write_str(", end=")?;
        write_bound(f, self.end.map(iso).as_ref())?;
        f.write_str("]")
    }
}
