#![no_main]
use bigint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = BigInt::from_hex(s) {
            assert_eq!(BigInt::from_hex(&value.to_hex()).unwrap(), value);
        }
    }
});
