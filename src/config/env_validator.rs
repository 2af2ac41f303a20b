//! Validation of `ULSTOOLS_*` environment values
//!
//! Invalid values never abort: the caller keeps its current setting and
//! reports a warning naming the closest valid spelling.

use super::loader::ConfigWarning;

/// Validator for one enumerated environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, or describe why it was rejected.
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, ConfigWarning>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value.trim()).ok_or_else(|| ConfigWarning::InvalidEnv {
            var: self.var_name.to_string(),
            message: self.warning(value),
        })
    }

    /// Warning text for an unparseable value
    pub fn warning(&self, value: &str) -> String {
        let suggestion = self
            .suggest(value)
            .map(|s| format!(". Did you mean '{s}'?"))
            .unwrap_or_default();
        format!(
            "invalid {} value '{}'{} Valid values: {}",
            self.var_name,
            value,
            if suggestion.is_empty() { "." } else { suggestion.as_str() },
            self.valid_values.join(", ")
        )
    }

    /// Closest valid value within two edits, if any
    pub fn suggest(&self, value: &str) -> Option<&'a str> {
        closest(&value.to_lowercase(), self.valid_values)
    }
}

/// Closest candidate within two edits. Exact matches are not suggestions.
pub fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(input, candidate)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist > 0 && dist <= 2)
        .map(|(candidate, _)| candidate)
}

/// Byte-wise Levenshtein distance
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0usize; b.len() + 1];

    for (i, a_byte) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_byte) in b.iter().enumerate() {
            let cost = usize::from(a_byte != b_byte);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}
