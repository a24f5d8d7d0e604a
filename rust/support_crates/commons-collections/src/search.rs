//! Index search and membership tests with caller-supplied equality.
//!
//! The `_by` variants take an equality predicate `eq(element, candidate)`, which
//! lets callers compare by key, by identity ([`reference_eq`]) or with any other
//! relation. The plain variants use `PartialEq`.

/// Identity equality: true only when both references point at the same value.
#[inline]
pub fn reference_eq<T>(a: &T, b: &T) -> bool {
    std::ptr::eq(a, b)
}

/// Returns the position of the first item at or after `start` that is equal
/// to `element` according to `eq`.
pub fn index_of_by<'a, T, I, F>(items: I, element: &T, start: usize, eq: F) -> Option<usize>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T, &T) -> bool,
{
    items
        .into_iter()
        .enumerate()
        .skip(start)
        .find(|(_, item)| eq(element, *item))
        .map(|(pos, _)| pos)
}

pub fn index_of<'a, T, I>(items: I, element: &T, start: usize) -> Option<usize>
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    index_of_by(items, element, start, T::eq)
}

/// Returns the positions of all items at or after `start` that are equal to
/// `element` according to `eq`, in ascending order.
pub fn all_indexes_of_by<'a, T, I, F>(items: I, element: &T, start: usize, eq: F) -> Vec<usize>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T, &T) -> bool,
{
    items
        .into_iter()
        .enumerate()
        .skip(start)
        .filter(|(_, item)| eq(element, *item))
        .map(|(pos, _)| pos)
        .collect()
}

pub fn all_indexes_of<'a, T, I>(items: I, element: &T, start: usize) -> Vec<usize>
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    all_indexes_of_by(items, element, start, T::eq)
}

pub fn contains_by<'a, T, I, F>(items: I, element: &T, eq: F) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T, &T) -> bool,
{
    index_of_by(items, element, 0, eq).is_some()
}

pub fn contains<'a, T, I>(items: I, element: &T) -> bool
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    contains_by(items, element, T::eq)
}
