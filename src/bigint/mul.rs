//! Multiplication: schoolbook, Toom-2, and Toom-3 behind a size-scored
//! dispatch.
//!
//! The score is the product of the operand limb counts, a crude stand-in
//! for the work the schoolbook loop would do. The thresholds are
//! performance knobs, not correctness constants; every path computes the
//! same product.

use super::BigInt;
use crate::math;

const TOOM2_THRESHOLD: usize = 550;
const TOOM3_THRESHOLD: usize = 2200;

/// Signed product. Dispatches on the cost score, multiplies magnitudes,
/// then applies the sign.
pub(crate) fn mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let score = lhs.limbs.len() * rhs.limbs.len();
    let mut res = if score > TOOM3_THRESHOLD {
        toom3(lhs, rhs)
    } else if score > TOOM2_THRESHOLD {
        toom2(lhs, rhs)
    } else {
        schoolbook(lhs, rhs)
    };
    res.negative = lhs.negative != rhs.negative;
    res.normalize();
    res
}

/// Grade-school product of the magnitudes: every limb pair contributes a
/// 64-bit partial product split across two adjacent result limbs.
pub(crate) fn schoolbook(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let mut res = BigInt::new();
    res.limbs.resize(lhs.limbs.len() + rhs.limbs.len() + 1, 0);
    for (i, &a) in lhs.limbs.iter().enumerate() {
        for (j, &b) in rhs.limbs.iter().enumerate() {
            let prod = u64::from(a) * u64::from(b);
            if prod != 0 {
                math::iadd_in(&mut res.limbs, i + j, prod as u32);
            }
            if prod >> 32 != 0 {
                math::iadd_in(&mut res.limbs, i + j + 1, (prod >> 32) as u32);
            }
        }
    }
    res
}

/// Low and high halves of a magnitude, split at limb offset `at`.
fn split2(big: &BigInt, at: usize) -> (BigInt, BigInt) {
    let cut = big.limbs.len().min(at);
    let mut low = BigInt {
        limbs: big.limbs[..cut].to_vec(),
        negative: false,
    };
    let mut high = BigInt {
        limbs: big.limbs[cut..].to_vec(),
        negative: false,
    };
    low.normalize();
    high.normalize();
    (low, high)
}

/// Karatsuba: three half-size products instead of four.
///
/// With `A = a1·B + a0` and `B = b1·B + b0` (B = 2^(32s)), the middle
/// coefficient `a1·b0 + a0·b1` is recovered as
/// `a0·b0 + a1·b1 - (a1 - a0)·(b1 - b0)`.
pub(crate) fn toom2(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let s = math::ceil_div(lhs.limbs.len().max(rhs.limbs.len()), 2);
    let (p_low, p_high) = split2(lhs, s);
    let (q_low, q_high) = split2(rhs, s);
    let r0 = &p_low * &q_low;
    let r2 = &p_high * &q_high;
    let mut r1 = &r0 + &r2;
    r1 -= (p_high - p_low) * (q_high - q_low);
    recombine(lhs.limbs.len() + rhs.limbs.len() + 1, s, &[r0, r1, r2])
}

/// The three coefficients of one operand evaluated at the five Toom-3
/// interpolation points.
struct Eval3 {
    zero: BigInt,
    one: BigInt,
    negone: BigInt,
    negtwo: BigInt,
    inf: BigInt,
}

fn eval3(big: &BigInt, s: usize) -> Eval3 {
    let cut0 = big.limbs.len().min(s);
    let cut1 = big.limbs.len().min(2 * s);
    let mut b0 = BigInt {
        limbs: big.limbs[..cut0].to_vec(),
        negative: false,
    };
    let mut b1 = BigInt {
        limbs: big.limbs[cut0..cut1].to_vec(),
        negative: false,
    };
    let mut b2 = BigInt {
        limbs: big.limbs[cut1..].to_vec(),
        negative: false,
    };
    b0.normalize();
    b1.normalize();
    b2.normalize();
    let tmp = &b0 + &b2;
    let one = &tmp + &b1;
    let negone = tmp - &b1;
    // P(-2) = b0 - 2·b1 + 4·b2 = 2·(P(-1) + b2) - b0
    let negtwo = ((&negone + &b2) << 1) - &b0;
    Eval3 {
        zero: b0,
        one,
        negone,
        negtwo,
        inf: b2,
    }
}

/// Toom-3: five third-size products. Evaluate both operands at
/// `{0, 1, -1, -2, inf}`, multiply pointwise, and interpolate the product
/// polynomial's coefficients back out.
pub(crate) fn toom3(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let s = math::ceil_div(lhs.limbs.len().max(rhs.limbs.len()), 3);
    let p = eval3(lhs, s);
    let q = eval3(rhs, s);
    let p0 = p.zero * q.zero;
    let p1 = p.one * q.one;
    let pm1 = p.negone * q.negone;
    let pm2 = p.negtwo * q.negtwo;
    let pinf = p.inf * q.inf;

    let three = BigInt::from(3u32);
    let r0 = p0.clone();
    let r4 = pinf.clone();
    let mut r3 = (pm2 - &p1) / &three;
    let mut r1 = div2(p1 - &pm1);
    let mut r2 = pm1 - p0;
    r3 = div2(&r2 - r3) + (pinf << 1);
    r2 += &r1 - &r4;
    r1 -= &r3;
    recombine(lhs.limbs.len() + rhs.limbs.len() + 1, s, &[r0, r1, r2, r3, r4])
}

/// Exact halving of an interpolation value. The one odd value that shows
/// up here is -1, which must collapse to 0 rather than stay -1 the way an
/// arithmetic shift would leave it.
fn div2(mut big: BigInt) -> BigInt {
    if big.negative && big.limbs == [1] {
        return BigInt::new();
    }
    big >>= 1;
    big
}

/// Accumulate `parts[k]` at limb offset `stride·k`.
fn recombine(len: usize, stride: usize, parts: &[BigInt]) -> BigInt {
    let mut res = BigInt::new();
    res.limbs.resize(len, 0);
    for (k, part) in parts.iter().enumerate() {
        debug_assert!(!part.negative);
        for (j, &limb) in part.limbs.iter().enumerate() {
            if limb != 0 {
                math::iadd_in(&mut res.limbs, stride * k + j, limb);
            }
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_magnitude(rng: &mut StdRng, limbs: usize) -> BigInt {
        let mut big = BigInt {
            limbs: (0..limbs).map(|_| rng.random()).collect(),
            negative: false,
        };
        big.normalize();
        big
    }

    /// All three algorithms are forced onto the same inputs, including
    /// sizes far below their dispatch thresholds.
    #[test]
    fn algorithms_agree() {
        let mut rng = StdRng::seed_from_u64(0x746f6f6d);
        let sizes: &[(usize, usize)] = &[
            (1, 1),
            (3, 2),
            (8, 8),
            (17, 5),
            (24, 24),
            (40, 13),
            (40, 40),
            (70, 66),
        ];
        for &(la, lb) in sizes {
            let a = random_magnitude(&mut rng, la);
            let b = random_magnitude(&mut rng, lb);
            let mut school = schoolbook(&a, &b);
            let mut t2 = toom2(&a, &b);
            let mut t3 = toom3(&a, &b);
            school.normalize();
            t2.normalize();
            t3.normalize();
            assert_eq!(school, t2, "toom2 mismatch at {}x{}", la, lb);
            assert_eq!(school, t3, "toom3 mismatch at {}x{}", la, lb);
        }
    }

    /// The public dispatch agrees with the schoolbook loop across the
    /// threshold boundaries, signs included.
    #[test]
    fn dispatch_matches_schoolbook() {
        let mut rng = StdRng::seed_from_u64(0x64697370);
        for &limbs in &[10usize, 24, 30, 47, 60, 80] {
            let mut a = random_magnitude(&mut rng, limbs);
            let mut b = random_magnitude(&mut rng, limbs);
            a.negative = rng.random_bool(0.5) && !a.is_zero();
            b.negative = rng.random_bool(0.5) && !b.is_zero();
            let mut expected = schoolbook(&a, &b);
            expected.negative = a.negative != b.negative;
            expected.normalize();
            assert_eq!(mul(&a, &b), expected, "dispatch mismatch at {} limbs", limbs);
        }
    }

    #[test]
    fn div2_floors_negative_one_to_zero() {
        assert!(div2(BigInt::from(-1)).is_zero());
        assert_eq!(div2(BigInt::from(-4)), BigInt::from(-2));
        assert_eq!(div2(BigInt::from(6)), BigInt::from(3));
    }

    #[test]
    fn known_products() {
        let a: BigInt = "141568561781325403383098860354483467178".parse().unwrap();
        let b: BigInt = "144612517754537690773054331955552575159".parse().unwrap();
        let mut expect_school = schoolbook(&a, &b);
        expect_school.normalize();
        let mut t2 = toom2(&a, &b);
        t2.normalize();
        let mut t3 = toom3(&a, &b);
        t3.normalize();
        assert_eq!(expect_school, t2);
        assert_eq!(expect_school, t3);
        assert_eq!(
            (&a * &b).to_string(),
            "20472586154086285871813986416465847334330107130741145019054056571228754631302"
        );
    }
}
