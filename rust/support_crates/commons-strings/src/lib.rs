//! Null-safe string comparison, containment and joining helpers.
//!
//! Absent strings are modelled as `Option<&str>`. Unless stated otherwise an
//! absent string compares like the empty string, and trimming an absent string
//! leaves it absent.

pub mod comparison;
pub mod enums;
pub mod join;

pub use comparison::{
    compare, compare_ignore_case, contains_trim, contains_trim_ignore_case, equals_any,
    equals_any_ignore_case, equals_ignore_case, equals_ignore_case_trim, equals_trim, is_blank,
    is_not_blank, not_contains_trim, not_contains_trim_ignore_case, not_equals_any,
    not_equals_any_ignore_case, not_equals_ignore_case_trim, not_equals_trim, trim,
};
pub use enums::parse_enum;
pub use join::{join_non_blanks, join_with_filter, replace_with_single_space};
