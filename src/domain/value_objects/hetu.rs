//! Hetu Value Object
//!
//! A validated Finnish personal identity code (henkilötunnus).
//!
//! Layout of the 11 characters:
//!
//! ```text
//! D D M M Y Y C N N N K
//! └─ birth ─┘ │ └ind┘ └ checksum
//!             └ century marker (+, -, A)
//! ```
//!
//! The checksum is the 9-digit number `DDMMYYNNN` modulo 31, looked up in
//! [`CHECKSUM_ALPHABET`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Century, Sex};
use crate::domain::services::age_in_years;

/// Checksum characters indexed by remainder. G, I, O and Q are left out.
pub const CHECKSUM_ALPHABET: &str = "0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Number of characters in a hetu
pub const HETU_LEN: usize = 11;

const MARKER_POS: usize = 6;

/// Why a string is not a hetu.
///
/// Everything except [`HetuError::ChecksumMismatch`] is a structural failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HetuError {
    #[error("expected 11 characters, found {found}")]
    Length { found: usize },

    #[error("unknown century marker '{found}' (expected '+', '-' or 'A')")]
    CenturyMarker { found: char },

    #[error("'{found}' is not a valid DDMMYY birth date")]
    BirthDate { found: String },

    #[error("individual number '{found}' is not three digits")]
    IndividualNumber { found: String },

    #[error("checksum mismatch: expected '{expected}', found '{found}'")]
    ChecksumMismatch { expected: char, found: char },
}

impl HetuError {
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::ChecksumMismatch { .. })
    }

    /// Failure category without any characters of the rejected input.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Length { .. } => "length",
            Self::CenturyMarker { .. } => "century_marker",
            Self::BirthDate { .. } => "birth_date",
            Self::IndividualNumber { .. } => "individual_number",
            Self::ChecksumMismatch { .. } => "checksum",
        }
    }
}

/// A structurally valid hetu with a matching checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hetu {
    code: String,
    day: u32,
    month: u32,
    short_year: u32,
    century: Century,
    individual: u16,
}

impl Hetu {
    /// Validate `input` and keep its parsed fields.
    ///
    /// Checks run in a fixed order: length, century marker, birth date,
    /// individual number, checksum. The first failure is reported.
    pub fn parse(input: &str) -> Result<Self, HetuError> {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != HETU_LEN {
            return Err(HetuError::Length { found: chars.len() });
        }

        let marker = chars[MARKER_POS];
        let century = Century::from_marker(marker)
            .ok_or(HetuError::CenturyMarker { found: marker })?;

        let date_part = &chars[..MARKER_POS];
        let birth_date_error = || HetuError::BirthDate {
            found: date_part.iter().collect(),
        };
        let day = digits_value(&date_part[0..2]).ok_or_else(birth_date_error)?;
        let month = digits_value(&date_part[2..4]).ok_or_else(birth_date_error)?;
        let short_year = digits_value(&date_part[4..6]).ok_or_else(birth_date_error)?;
        if NaiveDate::from_ymd_opt(pivot_year(short_year), month, day).is_none() {
            return Err(birth_date_error());
        }

        let individual_part = &chars[MARKER_POS + 1..HETU_LEN - 1];
        let individual = digits_value(individual_part)
            .and_then(|n| u16::try_from(n).ok())
            .ok_or_else(|| HetuError::IndividualNumber {
                found: individual_part.iter().collect(),
            })?;

        let number = (day * 10_000 + month * 100 + short_year) * 1000 + u32::from(individual);
        let expected = checksum_for(number);
        let found = chars[HETU_LEN - 1];
        if found != expected {
            return Err(HetuError::ChecksumMismatch { expected, found });
        }

        Ok(Self {
            code: input.to_string(),
            day,
            month,
            short_year,
            century,
            individual,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Four-digit birth year resolved through the century marker
    pub fn year(&self) -> i32 {
        self.century.base_year() + self.short_year as i32
    }

    pub fn century(&self) -> Century {
        self.century
    }

    pub fn individual_number(&self) -> u16 {
        self.individual
    }

    pub fn checksum(&self) -> char {
        // parse() guarantees 11 chars
        self.code.chars().last().unwrap_or_default()
    }

    pub fn sex(&self) -> Sex {
        Sex::from_individual_number(self.individual)
    }

    /// Century-resolved birth date.
    ///
    /// `None` when the date only exists under the two-digit year rule used
    /// during validation, e.g. `290200-…` (1900 is not a leap year).
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month, self.day)
    }

    /// Age in whole years on `on`. `None` when [`Hetu::birth_date`] is.
    pub fn age_on(&self, on: NaiveDate) -> Option<i32> {
        self.birth_date().map(|birth| age_in_years(birth, on))
    }
}

/// Checksum character for a `DDMMYY` date part and a 3-digit individual number.
///
/// Returns `None` unless the concatenation is exactly 9 ASCII digits.
pub fn checksum_char(birth_date: &str, individual: &str) -> Option<char> {
    let digits: Vec<char> = birth_date.chars().chain(individual.chars()).collect();
    if digits.len() != 9 {
        return None;
    }
    digits_value(&digits).map(checksum_for)
}

fn checksum_for(number: u32) -> char {
    let index = (number % 31) as usize;
    CHECKSUM_ALPHABET.as_bytes()[index] as char
}

fn digits_value(chars: &[char]) -> Option<u32> {
    chars.iter().try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(c.to_digit(10)?)
    })
}

/// `strptime("%y")` century rule: 69–99 → 1900s, 00–68 → 2000s.
fn pivot_year(short_year: u32) -> i32 {
    let short_year = short_year as i32;
    if short_year >= 69 {
        1900 + short_year
    } else {
        2000 + short_year
    }
}

impl fmt::Display for Hetu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Hetu {
    type Err = HetuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Hetu {
    type Error = HetuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Hetu> for String {
    fn from(hetu: Hetu) -> Self {
        hetu.code
    }
}

impl AsRef<str> for Hetu {
    fn as_ref(&self) -> &str {
        &self.code
    }
}
