use core::ops::Deref;

use alloc::vec;
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::Digit;

/// Unsigned decimal magnitude, stored little-endian.
///
/// Always canonical: the most significant digit (the last one) is nonzero,
/// unless the magnitude is exactly `[0]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Magnitude(Vec<Digit>);

impl Magnitude {
    pub fn zero() -> Self {
        Magnitude(vec![0])
    }

    /// Canonicalize a raw little-endian digit buffer.
    ///
    /// Strips trailing (most significant) zero digits; an all-zero or empty
    /// buffer collapses to `[0]`.
    pub fn from_digits(mut digits: Vec<Digit>) -> Self {
        debug_assert!(digits.iter().all(|&digit| digit <= 9));
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        Magnitude(digits)
    }

    /// Little-endian digits of `n`; zero maps to `[0]`.
    pub fn from_u64(mut n: u64) -> Self {
        if n == 0 {
            return Self::zero();
        }
        let mut digits = Vec::new();
        while n != 0 {
            digits.push((n % 10) as Digit);
            n /= 10;
        }
        Magnitude(digits)
    }

    pub fn is_zero(&self) -> bool {
        self.0.as_slice() == [0]
    }
}

impl Deref for Magnitude {
    type Target = [Digit];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Zeroize for Magnitude {
    /// Wipes the digit buffer, then restores canonical zero so the
    /// representation invariants survive zeroization.
    fn zeroize(&mut self) {
        self.0.zeroize();
        self.0.push(0);
    }
}
