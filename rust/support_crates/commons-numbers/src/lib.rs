//! Null-safe numeric helpers.
//!
//! Every helper treats an absent operand (`None`) the way a caller holding a
//! nullable number expects: absent values are coalesced to defaults, skipped in
//! aggregates, or make a predicate false, rather than causing a failure.

pub mod arithmetic;
pub mod conversions;
pub mod predicates;

pub use arithmetic::{Sign, add, average, max, min, sign, subtract};
pub use conversions::{
    default_f64, default_i32, default_i64, default_value, parse_or, to_f64, to_f64_or, to_i32,
    to_i32_or, to_i64, to_i64_or,
};
pub use predicates::{
    equals, f64_equals, f64_not_equals, is_in_range, is_not_in_range, is_valid, not_equals,
};
