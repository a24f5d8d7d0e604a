use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};

/// Trims control characters and spaces (everything up to and including `' '`)
/// from both ends. An absent string stays absent.
#[inline]
pub fn trim(s: Option<&str>) -> Option<&str> {
    s.map(|s| s.trim_matches(|c: char| c <= ' '))
}

/// Returns true if `s` is absent, empty or whitespace only.
#[inline]
pub fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.chars().all(char::is_whitespace))
}

#[inline]
pub fn is_not_blank(s: Option<&str>) -> bool {
    !is_blank(s)
}

/// Lexicographic comparison where an absent string is treated as `""`.
pub fn compare(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or_default().cmp(b.unwrap_or_default())
}

/// Case-insensitive lexicographic comparison where an absent string is treated as `""`.
pub fn compare_ignore_case(a: Option<&str>, b: Option<&str>) -> Ordering {
    lowercase_chars(a.unwrap_or_default()).cmp(lowercase_chars(b.unwrap_or_default()))
}

fn lowercase_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Case-insensitive equality. Two absent strings are equal; absent never equals present.
pub fn equals_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => lowercase_chars(a)
            .zip_longest(lowercase_chars(b))
            .all(|eb| match eb {
                EitherOrBoth::Both(c1, c2) => c1 == c2,
                _ => false,
            }),
        (None, None) => true,
        _ => false,
    }
}

pub fn equals_trim(a: Option<&str>, b: Option<&str>) -> bool {
    trim(a) == trim(b)
}

pub fn not_equals_trim(a: Option<&str>, b: Option<&str>) -> bool {
    !equals_trim(a, b)
}

pub fn equals_ignore_case_trim(a: Option<&str>, b: Option<&str>) -> bool {
    equals_ignore_case(trim(a), trim(b))
}

pub fn not_equals_ignore_case_trim(a: Option<&str>, b: Option<&str>) -> bool {
    !equals_ignore_case_trim(a, b)
}

/// Checks whether the trimmed `s` contains the trimmed `search`.
/// Returns false when either is absent.
pub fn contains_trim(s: Option<&str>, search: Option<&str>) -> bool {
    match (trim(s), trim(search)) {
        (Some(s), Some(search)) => s.contains(search),
        _ => false,
    }
}

pub fn contains_trim_ignore_case(s: Option<&str>, search: Option<&str>) -> bool {
    match (trim(s), trim(search)) {
        (Some(s), Some(search)) => {
            let s: String = lowercase_chars(s).collect();
            let search: String = lowercase_chars(search).collect();
            s.contains(&search)
        }
        _ => false,
    }
}

pub fn not_contains_trim(s: Option<&str>, search: Option<&str>) -> bool {
    !contains_trim(s, search)
}

pub fn not_contains_trim_ignore_case(s: Option<&str>, search: Option<&str>) -> bool {
    !contains_trim_ignore_case(s, search)
}

/// Returns true if `s` equals any of the candidates. An absent `s` matches nothing.
pub fn equals_any<'a, I>(s: Option<&str>, candidates: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    s.is_some_and(|s| candidates.into_iter().any(|c| c == s))
}

pub fn equals_any_ignore_case<'a, I>(s: Option<&str>, candidates: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    s.is_some_and(|s| {
        candidates
            .into_iter()
            .any(|c| equals_ignore_case(Some(s), Some(c)))
    })
}

pub fn not_equals_any<'a, I>(s: Option<&str>, candidates: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    !equals_any(s, candidates)
}

pub fn not_equals_any_ignore_case<'a, I>(s: Option<&str>, candidates: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    !equals_any_ignore_case(s, candidates)
}
