#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let split = s.char_indices().nth(2).map_or(s.len(), |(i, _)| i);
        let (country, bban) = s.split_at(split);
        if let Ok(digits) = iban_validator::compute_check_digits(country, bban) {
            let iban = format!("{country}{digits}{bban}");
            assert!(iban_validator::is_valid_checksum(&iban));
        }
    }
});
