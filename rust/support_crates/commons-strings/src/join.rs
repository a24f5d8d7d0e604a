use itertools::Itertools;

use crate::comparison::is_not_blank;

/// Joins the items accepted by `predicate` with `separator`.
///
/// Returns `None` when `items` itself is absent, so callers can tell "nothing
/// to join" from "everything filtered out" (`Some("")`).
pub fn join_with_filter<I, S, P>(separator: &str, predicate: P, items: Option<I>) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: Fn(&str) -> bool,
{
    let items = items?;
    Some(
        items
            .into_iter()
            .filter(|s| predicate(s.as_ref()))
            .map(|s| s.as_ref().to_owned())
            .join(separator),
    )
}

/// Joins the non-blank items with `separator`.
pub fn join_non_blanks<I, S>(separator: &str, items: Option<I>) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_with_filter(separator, |s| is_not_blank(Some(s)), items)
}

/// Collapses every run of two or more spaces into a single space.
///
/// Only the space character is affected; tabs and newlines are kept.
pub fn replace_with_single_space(s: &str) -> String {
    s.chars()
        .coalesce(|a, b| {
            if a == ' ' && b == ' ' {
                Ok(' ')
            } else {
                Err((a, b))
            }
        })
        .collect()
}
