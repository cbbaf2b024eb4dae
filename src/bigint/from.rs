use alloc::vec::Vec;

use super::BigInt;

impl From<u64> for BigInt {
    fn from(n: u64) -> BigInt {
        let mut limbs = Vec::with_capacity(2);
        let mut n = n;
        while n != 0 {
            limbs.push(n as u32);
            n >>= 32;
        }
        BigInt {
            limbs,
            negative: false,
        }
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> BigInt {
        // unsigned_abs keeps i64::MIN in range.
        let mut res = BigInt::from(n.unsigned_abs());
        if n < 0 {
            res.negative = true;
        }
        res
    }
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(n: $ty) -> BigInt {
                    BigInt::from(n as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(n: $ty) -> BigInt {
                    BigInt::from(n as u64)
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 isize);
from_unsigned!(u8 u16 u32 usize);
