use core::cmp::Ordering;

use super::BigInt;
use crate::math;

impl Ord for BigInt {
    /// Total order: negatives below positives, then magnitudes compared
    /// high limb first (reversed for negatives).
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => math::compare(&self.limbs, &other.limbs),
            (true, true) => math::compare(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! partialeq_integer {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    *self == BigInt::from(*other)
                }
            }

            impl PartialEq<BigInt> for $ty {
                fn eq(&self, other: &BigInt) -> bool {
                    *other == BigInt::from(*self)
                }
            }
        )*
    };
}

partialeq_integer!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);
