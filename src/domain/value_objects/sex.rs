//! Legal sex encoded in the individual number

use serde::{Deserialize, Serialize};

/// Odd individual numbers are assigned to men, even ones to women.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn from_individual_number(number: u16) -> Self {
        if number % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_decides() {
        assert_eq!(Sex::from_individual_number(123), Sex::Male);
        assert_eq!(Sex::from_individual_number(308), Sex::Female);
        assert_eq!(Sex::from_individual_number(0), Sex::Female);
    }
}
