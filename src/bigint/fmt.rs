//! Textual output: decimal `Display`, `LowerHex`, and `Debug`.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display, LowerHex, Write};

use super::{div, BigInt, DivModRes};

/// Width of one decimal chunk. The magnitude is peeled off in groups of
/// this many digits by dividing by [`DECIMAL_CHUNK`]; the parser consumes
/// input with the same constant so the two always agree.
pub(crate) const DECIMAL_CHUNK_DIGITS: usize = 19;

/// 10^19, the largest power of ten that fits a `u64`.
pub(crate) const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }
        let radix = BigInt::from(DECIMAL_CHUNK);
        let mut scratch = self.clone();
        scratch.negative = false;

        // Least significant chunk first.
        let mut chunks: Vec<u64> = Vec::new();
        while !scratch.is_zero() {
            let DivModRes { q, r } = div::divmod_exec(scratch, radix.clone());
            let mut val: u64 = 0;
            if let Some(&hi) = r.limbs.get(1) {
                val = u64::from(hi) << 32;
            }
            if let Some(&lo) = r.limbs.first() {
                val |= u64::from(lo);
            }
            chunks.push(val);
            scratch = q;
        }

        let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut buf = itoa::Buffer::new();
        for (k, &val) in chunks.iter().enumerate().rev() {
            let digits = buf.format(val);
            // Interior chunks are zero-padded to full width.
            if k + 1 != chunks.len() {
                for _ in digits.len()..DECIMAL_CHUNK_DIGITS {
                    out.push('0');
                }
            }
            out.push_str(digits);
        }
        f.pad_integral(!self.negative, "", &out)
    }
}

impl LowerHex for BigInt {
    /// Hex digits of the magnitude, eight per limb, top limb unpadded.
    /// The `#` flag adds the `0x` prefix that [`BigInt::from_hex`]
    /// requires.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "0x", "0");
        }
        let mut out = String::with_capacity(8 * self.limbs.len());
        for &limb in self.limbs.iter().rev() {
            if out.is_empty() {
                write!(out, "{:x}", limb)?;
            } else {
                write!(out, "{:08x}", limb)?;
            }
        }
        f.pad_integral(!self.negative, "0x", &out)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl BigInt {
    /// Formats as `-?0x[0-9a-f]+`, the exact shape [`BigInt::from_hex`]
    /// accepts.
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self)
    }
}
