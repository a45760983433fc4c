use core::ops::Mul;

use alloc::vec;

use crate::digit::{DoubleDigit, RADIX};
use crate::magnitude::Magnitude;
use crate::{BigInt, Digit, Sign};

/// Schoolbook product of raw magnitudes.
///
/// For every digit of the shorter operand, accumulates its products with the
/// longer operand into positions `i + j` of the result buffer, rippling the
/// carry along the row. Quadratic; no fast-multiplication algorithm.
pub(super) fn mul(a: &[Digit], b: &[Digit]) -> Magnitude {
    let (longer, shorter) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let mut product = vec![0 as Digit; longer.len() + shorter.len()];
    for (i, &s) in shorter.iter().enumerate() {
        let mut carry: DoubleDigit = 0;
        for (j, &l) in longer.iter().enumerate() {
            let p = l as DoubleDigit * s as DoubleDigit + carry + product[i + j] as DoubleDigit;
            product[i + j] = (p % RADIX) as Digit;
            carry = p / RADIX;
        }
        if carry != 0 {
            product[i + longer.len()] = carry as Digit;
        }
    }
    Magnitude::from_digits(product)
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, factor: Self) -> BigInt {
        let sign = self.sign() * factor.sign();
        let magnitude = mul(self.magnitude(), factor.magnitude());
        // a zero operand yields a zero magnitude, and vice versa
        debug_assert_eq!(sign == Sign::NoSign, magnitude.is_zero());
        BigInt::from_parts(sign, magnitude)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, factor: Self) -> BigInt {
        &self * &factor
    }
}

impl Mul<i64> for BigInt {
    type Output = BigInt;

    fn mul(self, factor: i64) -> BigInt {
        &self * &BigInt::from(factor)
    }
}
