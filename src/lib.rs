#![cfg_attr(not(test), no_std)]

//! Arbitrary-precision signed decimal integers.
//!
//! [`BigInt`] stores a [`Sign`] plus a little-endian sequence of decimal
//! digits, growing to fit any result. Addition, subtraction and
//! multiplication are total; division is deliberately unsupported and
//! surfaces as [`Error::NotImplemented`] instead of a panic.

extern crate alloc;

mod arithmetic;
mod bigint;
pub use bigint::{BigInt, Sign};
mod digit;
pub use digit::Digit;
mod error;
pub use error::{Error, ParseError, Result};
mod magnitude;
