//! Finnish personal identity code (hetu) checks
//!
//! Thin entry points over [`Hetu`]: a predicate that never fails and an age
//! lookup that separates "no code given" from "bad code given".

use chrono::NaiveDate;

use crate::domain::value_objects::{Hetu, HetuError};
use crate::error::{UlsError, UlsResult};

pub use crate::domain::value_objects::{checksum_char, CHECKSUM_ALPHABET};

/// `true` when `hetu` is an 11-character code with a valid birth date,
/// century marker and checksum. Never panics.
pub fn is_valid_hetu(hetu: &str) -> bool {
    match Hetu::parse(hetu) {
        Ok(_) => true,
        Err(reason) => {
            tracing::trace!(reason = reason.kind(), "hetu rejected");
            false
        }
    }
}

/// Age in whole years on `reference_date` (today when `None`).
///
/// Returns `Ok(None)` for a missing or empty code and
/// [`UlsError::InvalidHetu`] for a non-empty code that fails validation.
/// A reference date before the birth date yields a negative age.
pub fn age_from_hetu(
    hetu: Option<&str>,
    reference_date: Option<NaiveDate>,
) -> UlsResult<Option<i32>> {
    let Some(code) = hetu.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let parsed = Hetu::parse(code).map_err(|reason| UlsError::invalid_hetu(code, reason))?;
    let on = reference_date.unwrap_or_else(today);

    // 29 Feb in a non-leap century year passes the two-digit year check only
    parsed.age_on(on).map(Some).ok_or_else(|| {
        UlsError::invalid_hetu(
            code,
            HetuError::BirthDate {
                found: code.chars().take(6).collect(),
            },
        )
    })
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hetu_for(ddmmyy: &str, marker: char, individual: &str) -> String {
        let check = checksum_char(ddmmyy, individual).unwrap();
        format!("{ddmmyy}{marker}{individual}{check}")
    }

    #[test]
    fn wrong_checksum_is_invalid() {
        assert!(!is_valid_hetu("010101-1234"));
    }

    #[test]
    fn day_32_is_invalid() {
        assert!(!is_valid_hetu("320101-123X"));
    }

    #[test]
    fn ten_chars_is_invalid() {
        assert!(!is_valid_hetu("0101012123"));
    }

    #[test]
    fn empty_string_is_invalid() {
        assert!(!is_valid_hetu(""));
    }

    #[test]
    fn generated_code_is_valid() {
        let code = hetu_for("010180", '-', "123");
        assert_eq!(code, "010180-1232");
        assert!(is_valid_hetu(&code));
    }

    #[test]
    fn flipping_checksum_invalidates() {
        let code = hetu_for("010180", '-', "123");
        let valid_check = code.chars().last().unwrap();
        for c in CHECKSUM_ALPHABET.chars().filter(|&c| c != valid_check) {
            let flipped = format!("{}{}", &code[..10], c);
            assert!(!is_valid_hetu(&flipped), "{flipped} should be invalid");
        }
    }

    #[test]
    fn age_on_birthday_and_day_before() {
        let code = hetu_for("010180", '-', "123");
        assert_eq!(
            age_from_hetu(Some(&code), Some(date(2020, 1, 1))).unwrap(),
            Some(40)
        );
        assert_eq!(
            age_from_hetu(Some(&code), Some(date(2019, 12, 31))).unwrap(),
            Some(39)
        );
    }

    #[test]
    fn missing_code_has_no_age() {
        assert_eq!(age_from_hetu(None, None).unwrap(), None);
        assert_eq!(age_from_hetu(Some(""), Some(date(2020, 1, 1))).unwrap(), None);
    }

    #[test]
    fn invalid_code_is_an_error() {
        let err = age_from_hetu(Some("010101-1234"), None).unwrap_err();
        assert!(matches!(
            err,
            UlsError::InvalidHetu {
                reason: HetuError::ChecksumMismatch { .. },
                ..
            }
        ));
    }

    #[test]
    fn nonexistent_century_leap_day_is_an_error() {
        let err = age_from_hetu(Some("290200-1239"), Some(date(2020, 1, 1))).unwrap_err();
        assert!(matches!(
            err,
            UlsError::InvalidHetu {
                reason: HetuError::BirthDate { .. },
                ..
            }
        ));
        // The same digits in the 2000s are a real date
        assert_eq!(
            age_from_hetu(Some("290200A1239"), Some(date(2020, 2, 29))).unwrap(),
            Some(20)
        );
    }

    #[test]
    fn reference_before_birth_is_negative() {
        let code = hetu_for("150610", 'A', "002");
        assert_eq!(
            age_from_hetu(Some(&code), Some(date(2000, 1, 1))).unwrap(),
            Some(-11)
        );
    }

    #[test]
    fn nineteenth_century_code() {
        let code = hetu_for("240399", '+', "901");
        assert_eq!(
            age_from_hetu(Some(&code), Some(date(1900, 3, 24))).unwrap(),
            Some(1)
        );
    }

    #[test]
    fn default_reference_is_today() {
        let code = hetu_for("010180", '-', "123");
        let age = age_from_hetu(Some(&code), None).unwrap().unwrap();
        assert!(age >= 46);
    }

    struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejection_log_leaves_out_the_code() {
        let buf = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || Capture(sink.clone()))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert!(!is_valid_hetu("010101-1234"));
            assert!(!is_valid_hetu("320101-123X"));
        });

        let logged = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("hetu rejected"), "{logged}");
        assert!(logged.contains("checksum"), "{logged}");
        assert!(logged.contains("birth_date"), "{logged}");
        assert!(!logged.contains("010101"), "{logged}");
        assert!(!logged.contains("320101"), "{logged}");
    }
}
