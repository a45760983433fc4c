use core::cmp::Ordering;
use core::ops::{Neg, Sub};

use alloc::vec::Vec;

use crate::digit::{SignedDoubleDigit, RADIX};
use crate::magnitude::Magnitude;
use crate::{BigInt, Digit};

use super::compare::cmp;

/// Subtract with borrow: `(a - b + borrow) mod 10`, borrow is `0` or `-1`.
#[inline]
pub(super) fn sbb(a: Digit, b: Digit, borrow: &mut SignedDoubleDigit) -> Digit {
    let diff = *borrow + a as SignedDoubleDigit - b as SignedDoubleDigit;
    if diff < 0 {
        *borrow = -1;
        (diff + RADIX as SignedDoubleDigit) as Digit
    } else {
        *borrow = 0;
        diff as Digit
    }
}

/// `a - b` on raw magnitudes.
///
/// The caller must ensure `a >= b` in magnitude order; the final borrow is
/// then always clear. The result is canonicalized, collapsing to `[0]` when
/// all digits cancel.
pub(super) fn sub(a: &[Digit], b: &[Digit]) -> Magnitude {
    debug_assert!(cmp(a, b) != Ordering::Less);

    let mut diff = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for (&l, &r) in a.iter().zip(b) {
        diff.push(sbb(l, r, &mut borrow));
    }
    for &l in &a[b.len()..] {
        diff.push(sbb(l, 0, &mut borrow));
    }
    debug_assert_eq!(borrow, 0);
    Magnitude::from_digits(diff)
}

impl Sub for &BigInt {
    type Output = BigInt;

    /// `a - b` is `a + (-b)`: the sum dispatch with the subtrahend's sign
    /// flipped.
    fn sub(self, subtrahend: Self) -> BigInt {
        super::add::signed(
            self.sign(),
            self.magnitude(),
            -subtrahend.sign(),
            subtrahend.magnitude(),
        )
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, subtrahend: Self) -> BigInt {
        &self - &subtrahend
    }
}

impl Sub<i64> for BigInt {
    type Output = BigInt;

    fn sub(self, subtrahend: i64) -> BigInt {
        &self - &BigInt::from(subtrahend)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(-self.sign(), self.magnitude().clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let (sign, magnitude) = self.into_parts();
        BigInt::from_parts(-sign, magnitude)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn borrow_ripples_through_zeros() {
        // 1000 - 1 = 999
        assert_eq!(&*sub(&[0, 0, 0, 1], &[1]), &[9, 9, 9]);
    }

    #[test]
    fn cancellation_collapses_to_single_zero() {
        assert!(sub(&[4, 2], &[4, 2]).is_zero());
    }

    #[test]
    fn high_zero_digits_are_stripped() {
        // 105 - 100 = 5
        assert_eq!(&*sub(&[5, 0, 1], &[0, 0, 1]), &[5]);
    }

    #[test]
    fn two_trillion_minus_one_trillion() {
        let one_trillion: BigInt = "1000000000000".parse().unwrap();
        let two_trillion: BigInt = "2000000000000".parse().unwrap();
        assert_eq!(&two_trillion - &one_trillion, one_trillion);
    }

    #[test]
    fn negating_a_difference_swaps_operands() {
        let one_trillion: BigInt = "1000000000000".parse().unwrap();
        let two_trillion: BigInt = "2000000000000".parse().unwrap();
        assert_eq!(
            -(&two_trillion - &one_trillion),
            &one_trillion - &two_trillion,
        );
    }

    #[test]
    fn subtracting_zero_and_from_zero() {
        let x = BigInt::from(17);
        assert_eq!(&x - &BigInt::zero(), x);
        assert_eq!(&BigInt::zero() - &x, BigInt::from(-17));
    }

    #[test]
    fn same_sign_negative_operands() {
        assert_eq!(BigInt::from(-5) - BigInt::from(-12), BigInt::from(7));
        assert_eq!(BigInt::from(-12) - BigInt::from(-5), BigInt::from(-7));
    }

    #[test]
    fn self_difference_has_zero_sign() {
        let x = BigInt::from(-31);
        let difference = &x - &x;
        assert_eq!(difference.sign(), crate::Sign::NoSign);
    }

    #[test]
    fn negation_fixes_zero() {
        assert_eq!(-BigInt::zero(), BigInt::zero());
        assert_eq!(-BigInt::from(9), BigInt::from(-9));
    }

    #[test]
    fn machine_integer_subtrahend() {
        let x = BigInt::from(100);
        assert_eq!(x - 101i64, BigInt::from(-1));
    }
}
