//! Null-safe collection helpers.
//!
//! - [`emptiness`]: emptiness checks and the "default empty collection" convention
//!   for optional collections.
//! - [`search`]: index search and membership with caller-supplied equality.
//! - [`transform`]: building, slicing, splitting and set-like operations.
//! - [`maps`]: value lookups and rewrites over maps, and [`MapBuilder`].

pub mod emptiness;
pub mod maps;
pub mod search;
pub mod transform;

pub use emptiness::{Len, default_collection, is_empty, is_not_empty};
pub use maps::{
    MapBuilder, MapLike, change_map_values, combine_values, get_map_values, remove_map_values,
    replace_none_values,
};
pub use search::{
    all_indexes_of, all_indexes_of_by, contains, contains_by, index_of, index_of_by, reference_eq,
};
pub use transform::{
    combine, get_n, get0, intersect_by, remove_all, remove_all_by, remove_index, set_n, split,
    sub_collection, subtract, subtract_by, to_set, to_vec,
};
