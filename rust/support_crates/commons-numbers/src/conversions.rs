//! Defaulting and conversion helpers for optional numbers.
//!
//! Conversions follow primitive `as` cast semantics (truncation toward zero for
//! floats, saturation at the target bounds, wrapping for narrowing integers),
//! which matches what callers get from the usual "long value of a number".

use std::str::FromStr;

use num_traits::AsPrimitive;

/// Returns `value` if present, `default` otherwise.
#[inline]
pub fn default_value<N>(value: Option<N>, default: N) -> N {
    value.unwrap_or(default)
}

pub fn default_i64<N: AsPrimitive<i64>>(value: Option<N>, default: i64) -> i64 {
    value.map_or(default, |v| v.as_())
}

pub fn default_i32<N: AsPrimitive<i32>>(value: Option<N>, default: i32) -> i32 {
    value.map_or(default, |v| v.as_())
}

pub fn default_f64<N: AsPrimitive<f64>>(value: Option<N>, default: f64) -> f64 {
    value.map_or(default, |v| v.as_())
}

/// Parses `s`, falling back to `default` when it is absent or malformed.
///
/// No trimming is performed: `" 42"` is malformed.
pub fn parse_or<T: FromStr>(s: Option<&str>, default: T) -> T {
    s.and_then(|s| s.parse().ok()).unwrap_or(default)
}

pub fn to_i64<N: AsPrimitive<i64>>(n: Option<N>) -> Option<i64> {
    n.map(|v| v.as_())
}

pub fn to_i64_or<N: AsPrimitive<i64>>(n: Option<N>, default: i64) -> i64 {
    default_i64(n, default)
}

pub fn to_i32<N: AsPrimitive<i32>>(n: Option<N>) -> Option<i32> {
    n.map(|v| v.as_())
}

pub fn to_i32_or<N: AsPrimitive<i32>>(n: Option<N>, default: i32) -> i32 {
    default_i32(n, default)
}

pub fn to_f64<N: AsPrimitive<f64>>(n: Option<N>) -> Option<f64> {
    n.map(|v| v.as_())
}

pub fn to_f64_or<N: AsPrimitive<f64>>(n: Option<N>, default: f64) -> f64 {
    default_f64(n, default)
}
