use std::{
    cmp::Ordering,
    ops::{Add, Neg, Sub},
};

use num_traits::ToPrimitive;

/// Adds two optional numbers.
///
/// When only one operand is present it is returned unchanged; when both are
/// absent the result is absent.
pub fn add<N>(a: Option<N>, b: Option<N>) -> Option<N>
where
    N: Add<Output = N>,
{
    match (a, b) {
        (Some(a), Some(b)) => Some(a + b),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// Subtracts `b` from `a`, treating an absent operand as zero.
///
/// A missing minuend yields the negated subtrahend; both absent yields `None`.
pub fn subtract<N>(a: Option<N>, b: Option<N>) -> Option<N>
where
    N: Sub<Output = N> + Neg<Output = N>,
{
    match (a, b) {
        (Some(a), Some(b)) => Some(a - b),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(-b),
        (None, None) => None,
    }
}

/// Numbers with a three-way sign.
pub trait Sign: Copy {
    /// Returns `-1`, `0` or `1` according to the sign of the value.
    fn sign(self) -> i32;
}

macro_rules! impl_integer_sign {
    ($($t:ty),*) => {
        $(impl Sign for $t {
            #[inline]
            fn sign(self) -> i32 {
                match self.cmp(&0) {
                    Ordering::Less => -1,
                    Ordering::Equal => 0,
                    Ordering::Greater => 1,
                }
            }
        })*
    };
}

macro_rules! impl_float_sign {
    ($($t:ty),*) => {
        $(impl Sign for $t {
            // Total ordering against positive zero: -0.0 is negative, NaN is positive.
            #[inline]
            fn sign(self) -> i32 {
                match self.total_cmp(&0.0) {
                    Ordering::Less => -1,
                    Ordering::Equal => 0,
                    Ordering::Greater => 1,
                }
            }
        })*
    };
}

impl_integer_sign!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_sign!(f32, f64);

/// Returns `-1`, `0` or `1` according to the sign of `x`.
pub fn sign<N: Sign>(x: N) -> i32 {
    x.sign()
}

/// Returns the greater of two optional values; an absent operand yields the other.
pub fn max<N: PartialOrd>(a: Option<N>, b: Option<N>) -> Option<N> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => {
            if a > b {
                Some(a)
            } else {
                Some(b)
            }
        }
    }
}

/// Returns the smaller of two optional values; an absent operand yields the other.
pub fn min<N: PartialOrd>(a: Option<N>, b: Option<N>) -> Option<N> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => {
            if a < b {
                Some(a)
            } else {
                Some(b)
            }
        }
    }
}

/// Arithmetic mean of the present, finite values.
///
/// Absent, infinite and `NaN` entries are skipped. Returns `0.0` when nothing
/// remains.
pub fn average<N, I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<N>>,
    N: ToPrimitive,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter_map(|v| v.to_f64())
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
