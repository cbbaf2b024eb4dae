#![no_main]
use bigint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = usize::from(data[0]) % (data.len() - 1) + 1;
    let a = from_bytes(&data[1..split], data[0] & 1 != 0);
    let b = from_bytes(&data[split..], data[0] & 2 != 0);
    if b.is_zero() {
        return;
    }
    let res = BigInt::divmod(&a, &b).unwrap();
    assert_eq!(&res.q * &b + &res.r, a);
});

fn from_bytes(bytes: &[u8], negative: bool) -> BigInt {
    let mut value = BigInt::new();
    for &byte in bytes {
        value = (value << 8usize) + BigInt::from(byte);
    }
    if negative {
        -value
    } else {
        value
    }
}
