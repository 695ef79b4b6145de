//! Value comparison of `f64` fields shared by the model types.
//!
//! Floats are compared by IEEE 754 total ordering after folding `-0.0` into `0.0` and every NaN
//! into one canonical NaN, so equality, ordering and hashing agree with each other.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// Folds the values which mean the same position into one representation.
fn canonical(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else {
        // -0.0 + 0.0 == +0.0
        value + 0.0
    }
}

pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    canonical(a).total_cmp(&canonical(b))
}

pub(crate) fn eq_f64(a: f64, b: f64) -> bool {
    cmp_f64(a, b) == Ordering::Equal
}

pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    canonical(value).to_bits().hash(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_zeros_are_equal() {
        assert!(eq_f64(0.0, -0.0));
        assert_eq!(cmp_f64(-0.0, 0.0), Ordering::Equal);
        assert_eq!(cmp_f64(-0.5, 0.0), Ordering::Less);
    }

    #[test]
    fn test_nans_are_equal() {
        assert!(eq_f64(f64::NAN, f64::NAN));
        assert!(eq_f64(f64::NAN, -f64::NAN));
        assert!(!eq_f64(f64::NAN, 1.0));
    }
}
