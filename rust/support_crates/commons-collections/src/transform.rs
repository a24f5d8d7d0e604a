//! Building, slicing, splitting and set-like operations over collections.

use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;

use crate::search::contains_by;

/// Copies the items into a new `Vec`; an absent source yields an empty one.
pub fn to_vec<T, I>(items: Option<I>) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    items.into_iter().flatten().collect()
}

/// Copies the items into a new `HashSet`; an absent source yields an empty one.
pub fn to_set<T, I>(items: Option<I>) -> HashSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    items.into_iter().flatten().collect()
}

/// Returns the first item, if any.
pub fn get0<T, I>(items: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
{
    items.into_iter().next()
}

/// Returns the item at `index`, or `default` when the collection is shorter.
pub fn get_n<T, I>(items: I, index: usize, default: T) -> T
where
    I: IntoIterator<Item = T>,
{
    items.into_iter().nth(index).unwrap_or(default)
}

/// Stores `value` at `index`, first growing the vector with `filler` as needed.
pub fn set_n<T: Clone>(items: &mut Vec<T>, index: usize, value: T, filler: T) {
    if items.len() <= index {
        items.resize(index + 1, filler);
    }
    items[index] = value;
}

/// Removes and returns the item at `index`, or `None` when out of bounds.
pub fn remove_index<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    (index < items.len()).then(|| items.remove(index))
}

/// Removes every item equal to `element` according to `eq`.
pub fn remove_all_by<T, F>(items: &mut Vec<T>, element: &T, eq: F)
where
    F: Fn(&T, &T) -> bool,
{
    items.retain(|item| !eq(element, item));
}

/// Removes every item equal to any of `to_remove`.
pub fn remove_all<T: PartialEq>(items: &mut Vec<T>, to_remove: &[T]) {
    items.retain(|item| !to_remove.contains(item));
}

/// Items of `a` that have no equal in `b`, in the order of `a`.
pub fn subtract_by<T, F>(a: &[T], b: &[T], eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    a.iter()
        .filter(|item| !contains_by(b, *item, &eq))
        .cloned()
        .collect()
}

pub fn subtract<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    subtract_by(a, b, T::eq)
}

/// Distinct items of `a` that have an equal in `b`, in the order of `a`.
pub fn intersect_by<T, F>(a: &[T], b: &[T], eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut result: Vec<T> = Vec::new();
    for item in a {
        if contains_by(b, item, &eq) && !contains_by(&result, item, &eq) {
            result.push(item.clone());
        }
    }
    result
}

/// Flattens a sequence of optional collections into one.
pub fn combine<T, C, I>(collections: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<C>>,
    C: IntoIterator<Item = T>,
{
    collections.into_iter().flatten().flatten().collect()
}

/// Items with positions in `[from, to)`; bounds past the end are clamped.
pub fn sub_collection<T, I>(items: I, from: usize, to: usize) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .take(to)
        .skip(from)
        .collect()
}

/// Splits the items into consecutive chunks of at most `max_size` items.
///
/// Returns no chunks when `max_size` is zero.
pub fn split<T, I>(items: I, max_size: usize) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    if max_size == 0 {
        return Vec::new();
    }
    items
        .into_iter()
        .chunks(max_size)
        .into_iter()
        .map(|chunk| chunk.collect())
        .collect()
}
