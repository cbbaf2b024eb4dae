#![no_main]
use bigint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = s.parse::<BigInt>() {
            // Anything that parses must round-trip.
            let text = value.to_string();
            assert_eq!(text.parse::<BigInt>().unwrap(), value);
        }
    }
});
