use core::cmp::Ordering;
use core::ops::Add;

use alloc::vec::Vec;

use crate::digit::{DoubleDigit, RADIX};
use crate::magnitude::Magnitude;
use crate::{BigInt, Digit, Sign};

use super::compare::cmp;
use super::subtract::sub;

/// Add with carry: `(a + b + carry) mod 10`, carry updated in place.
#[inline]
pub(super) fn adc(a: Digit, b: Digit, carry: &mut Digit) -> Digit {
    let sum = a as DoubleDigit + b as DoubleDigit + *carry as DoubleDigit;
    *carry = (sum / RADIX) as Digit;
    (sum % RADIX) as Digit
}

/// `a + b` on raw magnitudes.
///
/// Ripples the carry across the shorter operand, then across the remainder
/// of the longer one; a final carry appends one more digit.
pub(super) fn add(a: &[Digit], b: &[Digit]) -> Magnitude {
    let (longer, shorter) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let mut sum = Vec::with_capacity(longer.len() + 1);
    let mut carry = 0;
    for (&s, &l) in shorter.iter().zip(longer) {
        sum.push(adc(s, l, &mut carry));
    }
    for &l in &longer[shorter.len()..] {
        sum.push(adc(l, 0, &mut carry));
    }
    if carry != 0 {
        sum.push(carry);
    }
    Magnitude::from_digits(sum)
}

/// Sign-aware sum of two (sign, magnitude) pairs.
///
/// Subtraction reuses this with the subtrahend's sign flipped. Equal signs
/// add magnitudes; opposite signs subtract the smaller magnitude from the
/// larger, taking the larger operand's sign. Full cancellation forces the
/// zero sign.
pub(super) fn signed(
    lhs_sign: Sign,
    lhs: &Magnitude,
    rhs_sign: Sign,
    rhs: &Magnitude,
) -> BigInt {
    if lhs_sign == Sign::NoSign {
        return BigInt::from_parts(rhs_sign, rhs.clone());
    }
    if rhs_sign == Sign::NoSign {
        return BigInt::from_parts(lhs_sign, lhs.clone());
    }
    if lhs_sign == rhs_sign {
        return BigInt::from_parts(lhs_sign, add(lhs, rhs));
    }
    match cmp(lhs, rhs) {
        Ordering::Less => BigInt::from_parts(rhs_sign, sub(rhs, lhs)),
        _ => {
            let magnitude = sub(lhs, rhs);
            let sign = if magnitude.is_zero() {
                Sign::NoSign
            } else {
                lhs_sign
            };
            BigInt::from_parts(sign, magnitude)
        }
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, summand: Self) -> BigInt {
        signed(
            self.sign(),
            self.magnitude(),
            summand.sign(),
            summand.magnitude(),
        )
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, summand: Self) -> BigInt {
        &self + &summand
    }
}

impl Add<i64> for BigInt {
    type Output = BigInt;

    fn add(self, summand: i64) -> BigInt {
        &self + &BigInt::from(summand)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn carry_ripples_through_nines() {
        // 999 + 1 = 1000
        assert_eq!(&*add(&[9, 9, 9], &[1]), &[0, 0, 0, 1]);
    }

    #[test]
    fn final_carry_appends_a_digit() {
        // 5 + 5 = 10
        assert_eq!(&*add(&[5], &[5]), &[0, 1]);
    }

    #[test]
    fn adc_updates_carry() {
        let mut carry = 0;
        assert_eq!(adc(7, 8, &mut carry), 5);
        assert_eq!(carry, 1);
        assert_eq!(adc(0, 0, &mut carry), 1);
        assert_eq!(carry, 0);
    }

    #[test]
    fn one_trillion_twice() {
        let one_trillion: BigInt = "1000000000000".parse().unwrap();
        let two_trillion: BigInt = "2000000000000".parse().unwrap();
        assert_eq!(&one_trillion + &one_trillion, two_trillion);
    }

    #[test]
    fn equal_magnitudes_cancel_to_zero() {
        let one_trillion: BigInt = "1000000000000".parse().unwrap();
        let negated: BigInt = "-1000000000000".parse().unwrap();
        let sum = &one_trillion + &negated;
        assert_eq!(sum, BigInt::zero());
        assert_eq!(sum.sign(), Sign::NoSign);
    }

    #[test]
    fn zero_operands_short_circuit() {
        let x = BigInt::from(-42);
        assert_eq!(&BigInt::zero() + &x, x);
        assert_eq!(&x + &BigInt::zero(), x);
    }

    #[test]
    fn opposite_signs_take_larger_operand_sign() {
        assert_eq!(BigInt::from(3) + BigInt::from(-10), BigInt::from(-7));
        assert_eq!(BigInt::from(-3) + BigInt::from(10), BigInt::from(7));
    }

    #[test]
    fn machine_integer_summand() {
        let x = BigInt::from(100);
        assert_eq!(x + (-1i64), BigInt::from(99));
    }
}
