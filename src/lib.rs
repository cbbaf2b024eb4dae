//! Arbitrary-precision signed integers.
//!
//! This crate provides [`BigInt`], an integer of unbounded magnitude with
//! the full arithmetic, bitwise, comparison, conversion, and textual
//! surface a calculator needs. The magnitude lives in base-2^32 limbs next
//! to a sign flag; multiplication steps up from the schoolbook loop
//! through Toom-2 (Karatsuba) to Toom-3 as operands grow, and division is
//! Knuth's Algorithm D with the classic add-back correction.
//!
//! # Operating on values
//!
//! All the usual operators are available, for owned values and references
//! alike. Owned operands donate their buffers to the result, so chained
//! arithmetic avoids copying; pass references when a value is needed
//! afterwards.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "930350724".parse().unwrap();
//! let b: BigInt = "1000000000".parse().unwrap();
//! let c: BigInt = "101083004".parse().unwrap();
//! assert_eq!(a * b + c, BigInt::from(930350724101083004i64));
//! ```
//!
//! Bitwise operators act on the two's-complement view of a value, even
//! though storage is sign-magnitude:
//!
//! ```
//! use bigint::BigInt;
//!
//! let x = BigInt::from(-2);
//! assert_eq!(!&x, BigInt::from(1));
//! assert_eq!(&x >> 1usize, BigInt::from(-1));
//! ```
//!
//! # Text
//!
//! Decimal round-trips through [`FromStr`](core::str::FromStr) and
//! [`Display`](core::fmt::Display); hex through [`BigInt::from_hex`] and
//! [`BigInt::to_hex`].
//!
//! ```
//! use bigint::BigInt;
//!
//! let x = BigInt::from_hex("-0xdeadbeef").unwrap();
//! assert_eq!(x.to_string(), "-3735928559");
//! assert_eq!(x.to_hex(), "-0xdeadbeef");
//! ```
//!
//! # Errors
//!
//! Exactly three things can fail, all synchronously: parsing malformed
//! text, shifting by a negative count, and dividing by zero or raising to
//! a negative power. See [`Error`] and [`Category`]. Everything else is
//! total; storage grows as needed and the narrowing conversions
//! [`BigInt::to_i64`] and [`BigInt::to_f64`] truncate silently by design.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::comparison_chain)]

extern crate alloc;

mod bigint;
pub mod error;
mod math;

pub use crate::bigint::{BigInt, DivModRes};
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
