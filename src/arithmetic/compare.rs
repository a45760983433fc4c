use core::cmp::Ordering;

use crate::{BigInt, Digit, Sign};

/// Magnitude order on raw little-endian digits.
///
/// More digits wins; equal lengths compare digit by digit starting at the
/// most significant end. This is *little endian* order, the opposite of the
/// default ordering on slices.
pub(super) fn cmp(a: &[Digit], b: &[Digit]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

impl Ord for BigInt {
    /// Total numeric order: sign first (`Minus < NoSign < Plus`), then
    /// magnitude. Between two negatives the magnitude order is reversed,
    /// so `-10 < -5`.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign(), other.sign()) {
            (Sign::Plus, Sign::Plus) => cmp(self.magnitude(), other.magnitude()),
            (Sign::Minus, Sign::Minus) => cmp(other.magnitude(), self.magnitude()),
            (lhs, rhs) => lhs.cmp(&rhs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        *self == BigInt::from(*other)
    }
}
