use std::cmp::Ordering;

/// Returns true if `d` is present and is a finite, non-`NaN` number.
#[inline]
pub fn is_valid(d: Option<f64>) -> bool {
    d.is_some_and(|d| d.is_finite())
}

/// Checks whether `x` lies within `[a, b]`.
///
/// An absent `x` is never in range. When both bounds are present their order
/// does not matter. An absent bound leaves that side unconstrained.
pub fn is_in_range<N: PartialOrd>(x: Option<N>, a: Option<N>, b: Option<N>) -> bool {
    let Some(x) = x else {
        return false;
    };
    match (a, b) {
        (Some(a), Some(b)) => {
            let (lo, hi) = if a > b { (b, a) } else { (a, b) };
            lo <= x && x <= hi
        }
        (a, b) => {
            if a.is_some_and(|a| a > x) {
                return false;
            }
            if b.is_some_and(|b| b < x) {
                return false;
            }
            true
        }
    }
}

pub fn is_not_in_range<N: PartialOrd>(x: Option<N>, a: Option<N>, b: Option<N>) -> bool {
    !is_in_range(x, a, b)
}

/// Compares two optional numbers for equality; two absent values are equal.
pub fn equals<N: PartialOrd>(a: Option<N>, b: Option<N>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b) == Some(Ordering::Equal),
        (None, None) => true,
        _ => false,
    }
}

pub fn not_equals<N: PartialOrd>(a: Option<N>, b: Option<N>) -> bool {
    !equals(a, b)
}

/// Total-order equality: `NaN` equals itself and `0.0` differs from `-0.0`.
#[inline]
pub fn f64_equals(a: f64, b: f64) -> bool {
    a.total_cmp(&b) == Ordering::Equal
}

#[inline]
pub fn f64_not_equals(a: f64, b: f64) -> bool {
    !f64_equals(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid(Some(1.0)));
        assert!(!is_valid(None));
        assert!(!is_valid(Some(f64::NAN)));
        assert!(!is_valid(Some(f64::NEG_INFINITY)));
    }

    #[test]
    fn test_is_in_range() {
        assert!(is_in_range(Some(5), Some(1), Some(10)));
        assert!(is_in_range(Some(5), Some(10), Some(1)));
        assert!(is_in_range(Some(1), Some(1), Some(10)));
        assert!(is_in_range(Some(10), Some(1), Some(10)));
        assert!(!is_in_range(Some(11), Some(1), Some(10)));
        assert!(!is_in_range(None, Some(1), Some(10)));
        assert!(is_in_range(Some(5), None, Some(10)));
        assert!(!is_in_range(Some(11), None, Some(10)));
        assert!(is_in_range(Some(5), Some(1), None));
        assert!(!is_in_range(Some(0), Some(1), None));
        assert!(is_in_range(Some(-100), None, None));
        assert!(is_not_in_range(Some(0.5), Some(1.0), Some(2.0)));
    }

    #[test]
    fn test_equals() {
        assert!(equals(Some(1), Some(1)));
        assert!(equals::<i64>(None, None));
        assert!(!equals(Some(1), None));
        assert!(not_equals(Some(1), Some(2)));
        assert!(f64_equals(f64::NAN, f64::NAN));
        assert!(f64_not_equals(0.0, -0.0));
        assert!(f64_equals(1.25, 1.25));
    }
}
