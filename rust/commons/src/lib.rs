//! # Commons
//!
//! General-purpose building blocks for data-access and application code:
//!
//! * [`ranges`] - closed intervals over any ordered type, with optional bounds
//!   that resolve to configurable limits ([`ranges::Range`],
//!   [`ranges::DateRange`], [`ranges::LongRange`])
//! * [`iterators`] - a page-by-page lazy loading iterator and a composite
//!   key/value iterator, both able to delete the element last returned
//! * [`datetime`] - local day and week boundaries, week numbering, formatting
//!   and a table of named time zones
//! * [`collections`], [`numbers`], [`strings`], [`files`] - helpers that treat
//!   absent (`None`) inputs uniformly
//!
//! Every fallible operation returns [`Result`], whose [`Error`] distinguishes
//! invalid arguments, illegal state, unsupported operations, exhaustion and
//! I/O failures.
//!
//! This crate re-exports all of the above so that a single dependency gives
//! access to the whole set.

pub use commons_core::{Error, ErrorKind, Result, try_or_ret_some_err, verify_arg};

pub use commons_collections as collections;
pub use commons_datetime as datetime;
pub use commons_files as files;
pub use commons_iterators as iterators;
pub use commons_numbers as numbers;
pub use commons_ranges as ranges;
pub use commons_strings as strings;
