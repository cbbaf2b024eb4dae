//! Long division: Knuth's Algorithm D over 32-bit limbs.
//!
//! The divisor is normalized so its top limb has the high bit set, which
//! makes the two-limb trial digit accurate to within two. An over-large
//! trial is detected by the borrow out of the multiply-subtract and fixed
//! by adding the divisor back, a step that triggers with probability on
//! the order of 2/2^32 per digit.

use super::{BigInt, DivModRes};
use crate::math;

/// Multiply-subtract `digit · d` from `r` starting at limb offset `i`.
/// Returns whether the subtraction borrowed out of the top, meaning the
/// trial digit overshot the remainder.
fn mul_sub(r: &mut BigInt, digit: u64, d: &BigInt, i: usize) -> bool {
    let mut borrowed = false;
    let mut word = digit;
    let mut i = i;
    while word != 0 {
        let y = word as u32;
        for (j, &limb) in d.limbs.iter().enumerate() {
            let z = u64::from(limb) * u64::from(y);
            if z != 0 && math::isub_at(&mut r.limbs, i + j, z as u32) {
                borrowed = true;
            }
            if z >> 32 != 0 && math::isub_at(&mut r.limbs, i + j + 1, (z >> 32) as u32) {
                borrowed = true;
            }
        }
        word >>= 32;
        i += 1;
    }
    borrowed
}

/// Add the divisor back at limb offset `i` after an overshoot. Returns
/// whether the carry ran out the top, meaning the remainder is whole
/// again.
fn add_back(r: &mut BigInt, d: &BigInt, i: usize) -> bool {
    let mut restored = false;
    for (j, &limb) in d.limbs.iter().enumerate() {
        if limb != 0 && math::iadd_at(&mut r.limbs, i + j, limb) {
            restored = true;
        }
    }
    restored
}

/// Divides with a non-zero divisor, consuming both operands so their
/// buffers can be reused for the result.
pub(crate) fn divmod_exec(lhs: BigInt, rhs: BigInt) -> DivModRes {
    debug_assert!(!rhs.is_zero());
    let mut q = BigInt::new();
    let mut r = lhs;
    let mut d = rhs;
    q.negative = r.negative != d.negative;

    // Normalize: shift both sides until the divisor's top limb has its
    // high bit set.
    let s = d.limbs[d.limbs.len() - 1].leading_zeros() as usize;
    r <<= s;
    d <<= s;

    let n = d.limbs.len();
    if r.limbs.len() + 1 > n {
        q.limbs.resize(r.limbs.len() + 1 - n, 0);
    }
    let v1 = d.limbs[n - 1];

    for i in (n - 1..r.limbs.len()).rev() {
        // Two-limb numerator over the top divisor limb; the digit fits in
        // 33 bits thanks to the normalization shift.
        let mut numerator = u64::from(r.limbs[i]);
        if i + 1 < r.limbs.len() {
            numerator |= u64::from(r.limbs[i + 1]) << 32;
        }
        let mut digit = numerator / u64::from(v1);
        let pos = i + 1 - n;
        if mul_sub(&mut r, digit, &d, pos) {
            loop {
                digit -= 1;
                if add_back(&mut r, &d, pos) {
                    break;
                }
            }
        }
        if digit != 0 {
            math::iadd_in(&mut q.limbs, pos, digit as u32);
        }
        if digit >> 32 != 0 {
            math::iadd_in(&mut q.limbs, pos + 1, (digit >> 32) as u32);
        }
    }

    q.normalize();
    r.normalize();
    // The remainder is a multiple of 2^s by construction, so shifting the
    // normalization back out is exact for either sign.
    r >>= s;
    DivModRes { q, r }
}
