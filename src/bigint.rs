use core::fmt;
use core::ops::{Mul, Neg};
use core::str::FromStr;

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::magnitude::Magnitude;
use crate::{Digit, ParseError};

/// A [`BigInt`]'s composing sign.
///
/// The declaration order gives `Minus < NoSign < Plus`, which is the order
/// comparisons dispatch on.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    /// Product of signs; a zero operand absorbs.
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
            (Sign::Plus, Sign::Plus) | (Sign::Minus, Sign::Minus) => Sign::Plus,
            _ => Sign::Minus,
        }
    }
}

/// Arbitrary-precision signed decimal integer.
///
/// Sign-magnitude representation: a [`Sign`] plus little-endian decimal
/// digits, growing to fit any result. Two invariants hold after every
/// construction and operation:
///
/// - the magnitude carries no redundant most-significant zero digit,
/// - the sign is [`Sign::NoSign`] exactly when the magnitude is `[0]`.
///
/// Operations never mutate their operands; every result is freshly owned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BigInt {
    sign: Sign,
    magnitude: Magnitude,
}

impl BigInt {
    pub fn zero() -> Self {
        BigInt {
            sign: Sign::NoSign,
            magnitude: Magnitude::zero(),
        }
    }

    pub fn one() -> Self {
        BigInt::from(1i64)
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }

    /// The magnitude with the sign forced positive; zero stays zero.
    pub fn abs(&self) -> Self {
        let sign = match self.sign {
            Sign::NoSign => Sign::NoSign,
            _ => Sign::Plus,
        };
        BigInt {
            sign,
            magnitude: self.magnitude.clone(),
        }
    }

    pub(crate) fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// Assemble from parts, which must already satisfy the invariants.
    pub(crate) fn from_parts(sign: Sign, magnitude: Magnitude) -> Self {
        debug_assert_eq!(sign == Sign::NoSign, magnitude.is_zero());
        BigInt { sign, magnitude }
    }

    pub(crate) fn into_parts(self) -> (Sign, Magnitude) {
        (self.sign, self.magnitude)
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        if n == 0 {
            return BigInt::zero();
        }
        let sign = if n < 0 { Sign::Minus } else { Sign::Plus };
        BigInt {
            sign,
            magnitude: Magnitude::from_u64(n.unsigned_abs()),
        }
    }
}

impl From<i32> for BigInt {
    fn from(n: i32) -> Self {
        BigInt::from(n as i64)
    }
}

impl From<u32> for BigInt {
    fn from(n: u32) -> Self {
        BigInt::from(n as i64)
    }
}

impl FromStr for BigInt {
    type Err = ParseError;

    /// Reads an optional `+`/`-`, skips any run of leading zeros, then takes
    /// the remaining characters as decimal digits (most significant first).
    ///
    /// Nothing left after the zeros means canonical zero, whatever sign
    /// character was seen: `"-000"` parses to the same value as `"0"`.
    /// Anything that is not a decimal digit is rejected.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let bytes = s.as_bytes();
        let (sign, mut index) = match bytes[0] {
            b'-' => (Sign::Minus, 1),
            b'+' => (Sign::Plus, 1),
            _ => (Sign::Plus, 0),
        };
        while index < bytes.len() && bytes[index] == b'0' {
            index += 1;
        }
        if index == bytes.len() {
            return Ok(BigInt::zero());
        }

        let mut digits = Vec::with_capacity(bytes.len() - index);
        for (offset, character) in s[index..].char_indices() {
            match character.to_digit(10) {
                Some(digit) => digits.push(digit as Digit),
                None => {
                    return Err(ParseError::InvalidDigit {
                        character,
                        offset: index + offset,
                    })
                }
            }
        }
        digits.reverse();
        Ok(BigInt::from_parts(sign, Magnitude::from_digits(digits)))
    }
}

impl fmt::Display for BigInt {
    /// Canonical decimal: optional leading `-`, digits most significant
    /// first, no leading zeros except the literal `"0"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Minus {
            f.write_str("-")?;
        }
        for &digit in self.magnitude.iter().rev() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl Zeroize for BigInt {
    /// Wipes the digit buffer and resets the value to canonical zero.
    fn zeroize(&mut self) {
        self.magnitude.zeroize();
        self.sign = Sign::NoSign;
    }
}
