//! Closed intervals over ordered values with optional bounds.
//!
//! A bound that is absent means "unbounded on this side". Absent bounds are
//! resolved against the absolute limits of the range only by
//! [`Range::normalize`], which also swaps inverted bounds; containment and
//! intersection always operate on the normalized form.
//!
//! # Key Types
//!
//! - [`Range`] - A generic closed interval with a caller-supplied ordering
//! - [`DateRange`] - A closed interval of UTC instants with duration arithmetic
//! - [`LongRange`] - A plain pair of optional `i64` bounds

pub mod date_range;
pub mod long_range;
pub mod range;

pub use date_range::DateRange;
pub use long_range::LongRange;
pub use range::{
    Comparator, Range, f64_range, i32_range, i64_range, natural_range, unbounded_f64_range,
    unbounded_i32_range, unbounded_i64_range, unbounded_natural_range,
};
