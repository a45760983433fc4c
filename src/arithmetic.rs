//! Digit arithmetic on magnitudes, and the sign-aware operator impls.
//!
//! Each submodule pairs slice-level helpers (carry/borrow ripple over raw
//! little-endian digits, schoolbook row accumulation) with the corresponding
//! `core::ops` impls for [`BigInt`][crate::BigInt]. Signs never reach the
//! helpers; the operator impls dispatch on them and on magnitude order.

mod add;
mod compare;
mod divide;
mod multiply;
mod subtract;
