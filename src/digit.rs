/// A single decimal digit, `0..=9`.
///
/// [`BigInt`][crate::BigInt] magnitudes are composed of many digits,
/// least significant first.
pub type Digit = u8;

/// Unsigned type wide enough for a digit product plus carries.
pub(crate) type DoubleDigit = u16;
/// Signed type wide enough for a digit difference minus a borrow.
pub(crate) type SignedDoubleDigit = i16;

pub(crate) const RADIX: DoubleDigit = 10;
