//! Arithmetic operators.
//!
//! Each binary operator is implemented for all four ownership
//! combinations. The owned forms accumulate into whichever operand
//! already has the larger buffer, so chained arithmetic on temporaries
//! never copies limbs it does not have to.

use core::mem;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use super::{div, mul, BigInt};
use crate::math;

// MAGNITUDE
// ---------

/// Magnitude add, sign untouched.
fn accumulate(acc: &mut BigInt, other: &BigInt) {
    let len = acc.limbs.len().max(other.limbs.len()) + 1;
    acc.limbs.resize(len, 0);
    for (i, &limb) in other.limbs.iter().enumerate() {
        if limb != 0 {
            math::iadd_in(&mut acc.limbs, i, limb);
        }
    }
    acc.normalize();
}

/// Magnitude subtract. When the receiver turns out to be the smaller
/// magnitude the wrapped result is complemented back to positive and the
/// sign flips.
fn reduce(acc: &mut BigInt, other: &BigInt) {
    if acc.limbs.len() < other.limbs.len() {
        acc.limbs.resize(other.limbs.len(), 0);
    }
    let mut borrowed = false;
    for (i, &limb) in other.limbs.iter().enumerate() {
        if limb != 0 && math::isub_at(&mut acc.limbs, i, limb) {
            borrowed = true;
        }
    }
    if borrowed {
        for limb in &mut acc.limbs {
            *limb = !*limb;
        }
        math::iadd_in(&mut acc.limbs, 0, 1);
        acc.negative = !acc.negative;
    }
    acc.normalize();
}

/// Magnitude subtract when the receiver has strictly more limbs, so no
/// borrow can escape.
fn reduce_within(acc: &mut BigInt, other: &BigInt) {
    for (i, &limb) in other.limbs.iter().enumerate() {
        if limb != 0 {
            math::isub_in(&mut acc.limbs, i, limb);
        }
    }
    acc.normalize();
}

// ADD / SUB
// ---------

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        if self.negative == rhs.negative {
            accumulate(self, rhs);
        } else if self.limbs.len() > rhs.limbs.len() {
            reduce_within(self, rhs);
        } else {
            reduce(self, rhs);
        }
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, mut rhs: BigInt) {
        if rhs.limbs.capacity() > self.limbs.capacity() {
            mem::swap(self, &mut rhs);
        }
        *self += &rhs;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        if self.negative != rhs.negative {
            accumulate(self, rhs);
        } else if self.limbs.len() > rhs.limbs.len() {
            reduce_within(self, rhs);
        } else {
            reduce(self, rhs);
        }
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, mut rhs: BigInt) {
        if rhs.limbs.capacity() > self.limbs.capacity() {
            mem::swap(self, &mut rhs);
            self.negate();
            *self += &rhs;
        } else {
            *self -= &rhs;
        }
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        // Clone whichever side has more limbs as the accumulator.
        let (mut acc, other) = if rhs.limbs.len() > self.limbs.len() {
            (rhs.clone(), self)
        } else {
            (self.clone(), rhs)
        };
        acc += other;
        acc
    }
}

impl Add<BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, mut rhs: BigInt) -> BigInt {
        rhs += self;
        rhs
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: &BigInt) -> BigInt {
        self += rhs;
        self
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        let (mut acc, other) = if rhs.limbs.capacity() > self.limbs.capacity() {
            (rhs, self)
        } else {
            (self, rhs)
        };
        acc += &other;
        acc
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        if rhs.limbs.len() > self.limbs.len() {
            let mut acc = rhs.clone();
            acc.negate();
            acc += self;
            acc
        } else {
            let mut acc = self.clone();
            acc -= rhs;
            acc
        }
    }
}

impl Sub<BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, mut rhs: BigInt) -> BigInt {
        rhs.negate();
        rhs += self;
        rhs
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: &BigInt) -> BigInt {
        self -= rhs;
        self
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: BigInt) -> BigInt {
        if rhs.limbs.capacity() > self.limbs.capacity() {
            &self - rhs
        } else {
            self -= &rhs;
            self
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

// MUL
// ---

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        mul::mul(self, rhs)
    }
}

impl Mul<BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        self * &rhs
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        &self * rhs
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self = &*self * &rhs;
    }
}

// DIV / REM
// ---------

macro_rules! divrem_impl {
    ($imp:ident, $method:ident, $field:ident) => {
        impl $imp for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                assert!(!rhs.is_zero(), "attempt to divide by zero");
                div::divmod_exec(self.clone(), rhs.clone()).$field
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                assert!(!rhs.is_zero(), "attempt to divide by zero");
                div::divmod_exec(self.clone(), rhs).$field
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                assert!(!rhs.is_zero(), "attempt to divide by zero");
                div::divmod_exec(self, rhs.clone()).$field
            }
        }

        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                assert!(!rhs.is_zero(), "attempt to divide by zero");
                div::divmod_exec(self, rhs).$field
            }
        }
    };
}

divrem_impl!(Div, div, q);
divrem_impl!(Rem, rem, r);

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = mem::take(self) / rhs;
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: BigInt) {
        *self = mem::take(self) / rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = mem::take(self) % rhs;
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        *self = mem::take(self) % rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    #[test]
    fn sign_reconciliation() {
        assert_eq!(big("7") + big("-10"), big("-3"));
        assert_eq!(big("-7") + big("10"), big("3"));
        assert_eq!(big("-7") + big("-10"), big("-17"));
        assert_eq!(big("7") - big("10"), big("-3"));
        assert_eq!(big("-7") - big("-10"), big("3"));
        assert_eq!(big("10") - big("10"), BigInt::new());
        assert_eq!(big("0") - big("5"), big("-5"));
    }

    #[test]
    fn carry_ripples_across_limbs() {
        let x = big("18446744073709551615"); // 2^64 - 1
        assert_eq!(&x + &big("1"), big("18446744073709551616"));
        assert_eq!(big("18446744073709551616") - big("1"), x);
        // Borrow chain down through zero limbs.
        assert_eq!(
            big("340282366920938463463374607431768211456") - big("1"),
            big("340282366920938463463374607431768211455")
        );
    }

    #[test]
    fn every_ownership_combination_agrees() {
        let a = big("-123456789012345678901234567890");
        let b = big("987654321098765432109");
        let expect = big("-123456789012345678901234567890") + &b;
        assert_eq!(&a + &b, expect);
        assert_eq!(&a + b.clone(), expect);
        assert_eq!(a.clone() + &b, expect);
        assert_eq!(a.clone() + b.clone(), expect);

        let expect = &a - &b;
        assert_eq!(&a - b.clone(), expect);
        assert_eq!(a.clone() - &b, expect);
        assert_eq!(a.clone() - b.clone(), expect);

        let expect = &a * &b;
        assert_eq!(&a * b.clone(), expect);
        assert_eq!(a.clone() * &b, expect);
        assert_eq!(a.clone() * b.clone(), expect);

        let expect = &a / &b;
        assert_eq!(&a / b.clone(), expect);
        assert_eq!(a.clone() / &b, expect);
        assert_eq!(a.clone() / b.clone(), expect);

        let expect = &a % &b;
        assert_eq!(&a % b.clone(), expect);
        assert_eq!(a.clone() % &b, expect);
        assert_eq!(a.clone() % b.clone(), expect);
    }

    #[test]
    fn doubling_through_a_clone() {
        let mut x = big("99999999999999999999");
        x += x.clone();
        assert_eq!(x, big("199999999999999999998"));
        let mut y = big("42");
        y -= y.clone();
        assert!(y.is_zero());
    }

    #[test]
    fn compound_divrem_reuse() {
        let mut x = big("1000000000000000000000000");
        x /= big("1000000000000");
        assert_eq!(x, big("1000000000000"));
        x %= big("999999999999");
        assert_eq!(x, big("1"));
    }

    #[test]
    fn negation() {
        let x = big("123");
        assert_eq!(-&x, big("-123"));
        assert_eq!(-(-x.clone()), x);
        assert_eq!(-BigInt::new(), BigInt::new());
    }
}
