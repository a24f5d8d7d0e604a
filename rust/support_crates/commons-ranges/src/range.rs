//! A generic closed interval with optional bounds and a caller-supplied ordering.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A total ordering over `T`, shared between a range and its normalized copies.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A closed interval `[start, end]` over values ordered by a comparator.
///
/// Either bound may be absent, meaning the interval is open-ended on that side.
/// The absolute limits `min_value` and `max_value` are fixed at construction and
/// stand in for absent bounds once the range is [normalized](Self::normalize).
///
/// Bounds are not required to be ordered: a range whose start lies after its end
/// is corrected by normalization rather than rejected.
///
/// Equality and hashing consider only `(start, end)`; the limits and the
/// comparator do not participate.
#[derive(Clone)]
pub struct Range<T> {
    start: Option<T>,
    end: Option<T>,
    min_value: T,
    max_value: T,
    cmp: Comparator<T>,
}

impl<T> Range<T> {
    /// Creates a range with both bounds absent.
    ///
    /// # Arguments
    ///
    /// * `min_value` - The absolute lower limit, used when `start` is absent.
    /// * `max_value` - The absolute upper limit, used when `end` is absent.
    /// * `cmp` - The ordering of `T`.
    pub fn unbounded<F>(min_value: T, max_value: T, cmp: F) -> Range<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Range {
            start: None,
            end: None,
            min_value,
            max_value,
            cmp: Arc::new(cmp),
        }
    }

    /// Creates a range with the given bounds and absolute limits.
    pub fn with_bounds<F>(
        cmp: F,
        start: Option<T>,
        end: Option<T>,
        min_value: T,
        max_value: T,
    ) -> Range<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Range {
            start,
            end,
            min_value,
            max_value,
            cmp: Arc::new(cmp),
        }
    }

    pub fn start(&self) -> Option<&T> {
        self.start.as_ref()
    }

    pub fn set_start(&mut self, start: Option<T>) {
        self.start = start;
    }

    pub fn end(&self) -> Option<&T> {
        self.end.as_ref()
    }

    pub fn set_end(&mut self, end: Option<T>) {
        self.end = end;
    }

    pub fn min_value(&self) -> &T {
        &self.min_value
    }

    pub fn max_value(&self) -> &T {
        &self.max_value
    }

    pub fn comparator(&self) -> &Comparator<T> {
        &self.cmp
    }

    /// Returns `true` when both bounds are absent.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns `true` if `x` lies within the normalized range, both ends inclusive.
    ///
    /// An absent `x` is never contained, not even in a fully unbounded range.
    pub fn contains(&self, x: Option<&T>) -> bool {
        let Some(x) = x else {
            return false;
        };
        let (start, end) = self.resolved_bounds();
        (self.cmp)(x, start) != Ordering::Less && (self.cmp)(x, end) != Ordering::Greater
    }

    /// Tests whether two ranges overlap, using the ordering of `a`.
    ///
    /// Both ranges are normalized first. Ranges that merely touch at a boundary
    /// intersect. An absent argument never intersects anything.
    pub fn intersect(a: Option<&Range<T>>, b: Option<&Range<T>>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a.intersects(b),
            _ => false,
        }
    }

    /// Method form of [`Range::intersect`].
    pub fn intersects(&self, other: &Range<T>) -> bool {
        let (s1, e1) = self.resolved_bounds();
        let (s2, e2) = other.resolved_bounds();
        (self.cmp)(e1, s2) != Ordering::Less && (self.cmp)(e2, s1) != Ordering::Less
    }

    /// Borrowing counterpart of [`normalize`](Self::normalize): the ordered,
    /// fully resolved bounds of this range.
    fn resolved_bounds(&self) -> (&T, &T) {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => {
                if (self.cmp)(start, end) == Ordering::Less {
                    (start, end)
                } else {
                    (end, start)
                }
            }
            (start, end) => (
                start.as_ref().unwrap_or(&self.min_value),
                end.as_ref().unwrap_or(&self.max_value),
            ),
        }
    }
}

impl<T: Clone> Range<T> {
    /// Returns a new range with absent bounds replaced by the absolute limits
    /// and inverted bounds swapped. The receiver is left unchanged.
    ///
    /// Normalization is idempotent.
    pub fn normalize(&self) -> Range<T> {
        let (start, end) = self.resolved_bounds();
        Range {
            start: Some(start.clone()),
            end: Some(end.clone()),
            min_value: self.min_value.clone(),
            max_value: self.max_value.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Range<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<T: Eq> Eq for Range<T> {}

impl<T: Hash> Hash for Range<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Range [start=")?;
        write_bound(f, self.start.as_ref())?;
        f.write_str(", end=")?;
        write_bound(f, self.end.as_ref())?;
        f.write_str("]")
    }
}

/// Writes an optional bound, spelling an absent one as `unbounded`.
pub(crate) fn write_bound<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    bound: Option<&T>,
) -> fmt::Result {
    match bound {
        Some(value) => write!(f, "{value}"),
        None => f.write_str("unbounded"),
    }
}

pub fn i64_range(start: Option<i64>, end: Option<i64>) -> Range<i64> {
    Range::with_bounds(i64::cmp, start, end, i64::MIN, i64::MAX)
}

pub fn unbounded_i64_range() -> Range<i64> {
    i64_range(None, None)
}

pub fn i32_range(start: Option<i32>, end: Option<i32>) -> Range<i32> {
    Range::with_bounds(i32::cmp, start, end, i32::MIN, i32::MAX)
}

pub fn unbounded_i32_range() -> Range<i32> {
    i32_range(None, None)
}

/// A range of `f64` ordered by [`f64::total_cmp`], limited to the finite values.
pub fn f64_range(start: Option<f64>, end: Option<f64>) -> Range<f64> {
    Range::with_bounds(f64::total_cmp, start, end, f64::MIN, f64::MAX)
}

pub fn unbounded_f64_range() -> Range<f64> {
    f64_range(None, None)
}

/// A range over any [`Ord`] type using its natural ordering.
pub fn natural_range<T>(start: Option<T>, end: Option<T>, min_value: T, max_value: T) -> Range<T>
where
    T: Ord + 'static,
{
    Range::with_bounds(T::cmp, start, end, min_value, max_value)
}

pub fn unbounded_natural_range<T>(min_value: T, max_value: T) -> Range<T>
where
    T: Ord + 'static,
{
    Range::unbounded(min_value, max_value, T::cmp)
}
