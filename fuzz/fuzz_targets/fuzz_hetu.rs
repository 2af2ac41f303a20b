#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Predicate and parser must agree and never panic
        let valid = ulstools::is_valid_hetu(input);
        assert_eq!(valid, ulstools::Hetu::parse(input).is_ok());
        let _ = ulstools::age_from_hetu(Some(input), None);
    }
});
