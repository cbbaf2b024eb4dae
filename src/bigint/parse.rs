//! Parsing from decimal and hex strings.

use alloc::vec::Vec;
use core::str::FromStr;

use super::fmt::{DECIMAL_CHUNK, DECIMAL_CHUNK_DIGITS};
use super::BigInt;
use crate::error::{Error, ErrorCode, Result};
use crate::math;

impl FromStr for BigInt {
    type Err = Error;

    /// Parses `-?[0-9]+`: an optional leading minus, then at least one
    /// ASCII digit. No leading `+`, no separators.
    fn from_str(s: &str) -> Result<BigInt> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let prefix = s.len() - digits.len();
        if digits.is_empty() {
            return Err(Error::parse(ErrorCode::MissingDigits, prefix));
        }
        if let Some(pos) = digits.bytes().position(|b| !b.is_ascii_digit()) {
            return Err(Error::parse(ErrorCode::InvalidDigit, prefix + pos));
        }

        // Consume in 19-digit groups, short group first, folding each into
        // a u64 and scaling the accumulator by 10^19 per group.
        let radix = BigInt::from(DECIMAL_CHUNK);
        let mut res = BigInt::new();
        let mut rest = digits.as_bytes();
        while !rest.is_empty() {
            let take = match rest.len() % DECIMAL_CHUNK_DIGITS {
                0 => DECIMAL_CHUNK_DIGITS,
                rem => rem,
            };
            let (head, tail) = rest.split_at(take);
            let val = head
                .iter()
                .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'));
            res *= &radix;
            accumulate_word(&mut res, val);
            rest = tail;
        }
        if negative {
            res.negate();
        }
        Ok(res)
    }
}

impl BigInt {
    /// Parses `-?0x[0-9a-fA-F]+`. The prefix is mandatory; digits of
    /// either case are accepted, eight per limb from the right.
    ///
    /// # Errors
    ///
    /// Fails with a [`Parse`](crate::Category::Parse) error on a missing
    /// prefix, empty digits, or a non-hex character.
    pub fn from_hex(s: &str) -> Result<BigInt> {
        let (negative, digits) = if let Some(rest) = s.strip_prefix("-0x") {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix("0x") {
            (false, rest)
        } else {
            return Err(Error::parse(ErrorCode::MissingHexPrefix, 0));
        };
        let prefix = s.len() - digits.len();
        if digits.is_empty() {
            return Err(Error::parse(ErrorCode::MissingDigits, prefix));
        }
        if let Some(pos) = digits.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(Error::parse(ErrorCode::InvalidDigit, prefix + pos));
        }

        let bytes = digits.as_bytes();
        let mut limbs = Vec::with_capacity(math::ceil_div(bytes.len(), 8));
        for chunk in bytes.rchunks(8) {
            let limb = chunk.iter().fold(0u32, |acc, &b| acc << 4 | hex_digit(b));
            limbs.push(limb);
        }
        let mut res = BigInt {
            limbs,
            negative: false,
        };
        res.normalize();
        if negative {
            res.negate();
        }
        Ok(res)
    }
}

/// Value of a pre-validated hex digit byte.
fn hex_digit(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'a'..=b'f' => u32::from(b - b'a' + 10),
        _ => u32::from(b - b'A' + 10),
    }
}

/// Adds a machine word into the low limbs in place.
fn accumulate_word(big: &mut BigInt, val: u64) {
    if val == 0 {
        return;
    }
    let len = big.limbs.len().max(2) + 1;
    big.limbs.resize(len, 0);
    math::iadd_in(&mut big.limbs, 0, val as u32);
    if val >> 32 != 0 {
        math::iadd_in(&mut big.limbs, 1, (val >> 32) as u32);
    }
    big.normalize();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inputs straddling the 19-digit chunk boundary, where the short
    /// leading group and the accumulator scaling interact.
    #[test]
    fn chunk_boundaries() {
        for text in [
            "999999999999999999",
            "9999999999999999999",
            "99999999999999999999",
            "10000000000000000000",
            "9999999999999999999999999999999999999",
            "99999999999999999999999999999999999999",
            "100000000000000000000000000000000000001",
        ] {
            assert_eq!(text.parse::<BigInt>().unwrap().to_string(), text);
        }
    }

    #[test]
    fn rejects_anything_but_digits() {
        assert!("+1".parse::<BigInt>().is_err());
        assert!(" 1".parse::<BigInt>().is_err());
        assert!("1 ".parse::<BigInt>().is_err());
        assert!("--1".parse::<BigInt>().is_err());
        assert!("1_000".parse::<BigInt>().is_err());
    }

    #[test]
    fn error_offsets_point_at_the_byte() {
        assert_eq!("12a4".parse::<BigInt>().unwrap_err().offset(), 2);
        assert_eq!("-12a4".parse::<BigInt>().unwrap_err().offset(), 3);
        assert_eq!("-".parse::<BigInt>().unwrap_err().offset(), 1);
        assert_eq!(BigInt::from_hex("0x12g4").unwrap_err().offset(), 4);
        assert_eq!(BigInt::from_hex("-0x").unwrap_err().offset(), 3);
    }

    #[test]
    fn hex_accepts_either_case() {
        let lower = BigInt::from_hex("0xabcdef0123456789").unwrap();
        let upper = BigInt::from_hex("0xABCDEF0123456789").unwrap();
        let mixed = BigInt::from_hex("0xAbCdEf0123456789").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn leading_zeros_normalize() {
        assert_eq!(
            BigInt::from_hex("0x00000000ffffffff").unwrap(),
            BigInt::from(u32::MAX)
        );
        assert_eq!("000".parse::<BigInt>().unwrap(), BigInt::new());
        assert_eq!("-0".parse::<BigInt>().unwrap(), BigInt::new());
    }
}
