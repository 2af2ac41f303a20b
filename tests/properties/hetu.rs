//! Property tests for hetu validation.

use chrono::NaiveDate;
use proptest::prelude::*;

use ulstools::{age_from_hetu, checksum_char, is_valid_hetu, Hetu, UlsError, CHECKSUM_ALPHABET};

/// Valid `(DDMMYY, marker, NNN)` parts; days capped at 28 so every month works.
fn hetu_parts() -> impl Strategy<Value = (String, char, String)> {
    (
        1u32..=28,
        1u32..=12,
        0u32..=99,
        prop::sample::select(vec!['+', '-', 'A']),
        0u32..=999,
    )
        .prop_map(|(d, m, y, marker, n)| {
            (format!("{d:02}{m:02}{y:02}"), marker, format!("{n:03}"))
        })
}

fn valid_hetu() -> impl Strategy<Value = String> {
    hetu_parts().prop_map(|(date, marker, individual)| {
        let check = checksum_char(&date, &individual).unwrap();
        format!("{date}{marker}{individual}{check}")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics on arbitrary input.
    #[test]
    fn property_never_panics(s in "(?s).{0,32}") {
        let _ = is_valid_hetu(&s);
        let _ = age_from_hetu(Some(&s), None);
    }

    /// PROPERTY: Anything that is not 11 characters long is rejected.
    #[test]
    fn property_wrong_length_is_invalid(s in "[0-9A-Y+-]{0,30}") {
        prop_assume!(s.chars().count() != 11);
        prop_assert!(!is_valid_hetu(&s));
    }

    /// PROPERTY: An unknown century marker is rejected.
    #[test]
    fn property_unknown_marker_is_invalid(
        code in valid_hetu(),
        marker in "[^+A-]",
    ) {
        let mut chars: Vec<char> = code.chars().collect();
        chars[6] = marker.chars().next().unwrap();
        let mutated: String = chars.into_iter().collect();
        prop_assert!(!is_valid_hetu(&mutated));
    }

    /// PROPERTY: Generated codes validate and any other checksum char fails.
    #[test]
    fn property_checksum_flip_is_invalid(code in valid_hetu(), idx in 0usize..31) {
        prop_assert!(is_valid_hetu(&code));

        let replacement = CHECKSUM_ALPHABET.as_bytes()[idx] as char;
        let mut chars: Vec<char> = code.chars().collect();
        prop_assume!(chars[10] != replacement);
        chars[10] = replacement;
        let flipped: String = chars.into_iter().collect();
        prop_assert!(!is_valid_hetu(&flipped));
    }

    /// PROPERTY: `is_valid_hetu` and `Hetu::parse` always agree.
    #[test]
    fn property_parse_agrees_with_predicate(s in "[0-9]{6}[+A-][0-9A-Z]{4}") {
        prop_assert_eq!(is_valid_hetu(&s), Hetu::parse(&s).is_ok());
    }

    /// PROPERTY: Non-empty invalid input is an error, never a missing age.
    #[test]
    fn property_invalid_input_is_error(s in ".{1,20}") {
        prop_assume!(!is_valid_hetu(&s));
        let result = age_from_hetu(Some(&s), None);
        let is_invalid_hetu = matches!(result, Err(UlsError::InvalidHetu { .. }));
        prop_assert!(is_invalid_hetu);
    }

    /// PROPERTY: Age is zero on the birthday and grows by one per year.
    #[test]
    fn property_age_on_birthdays(code in valid_hetu(), years in 0i32..120) {
        let hetu = Hetu::parse(&code).unwrap();
        // day <= 28, so every anniversary exists
        let anniversary =
            NaiveDate::from_ymd_opt(hetu.year() + years, hetu.month(), hetu.day()).unwrap();
        prop_assert_eq!(age_from_hetu(Some(&code), Some(anniversary)).unwrap(), Some(years));
        prop_assert_eq!(
            age_from_hetu(Some(&code), anniversary.pred_opt()).unwrap(),
            Some(years - 1)
        );
    }
}
