#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — rejections are fine, panics are bugs.
        let result = iban_validator::validate(s);
        let normalized = iban_validator::normalize(s);
        assert_eq!(iban_validator::normalize(&normalized), normalized);
        assert_eq!(iban_validator::normalize(&iban_validator::format(s)), normalized);
        if result.is_ok() {
            assert_eq!(iban_validator::checksum(s), Ok(1));
        }
    }
});
