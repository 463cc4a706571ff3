use crate::utils::error::{InsightsError, Result};

/// Checks that `value` is a plain run of ASCII digits, i.e. a non-negative
/// integer literal with no sign, separators or surrounding whitespace.
pub fn is_numeric_literal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn parse_salary(field_name: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| InsightsError::NonNumericValueError {
            field: field_name.to_string(),
            value: value.to_string(),
        })
}

pub fn validate_salary_ordering(min: i64, max: i64) -> Result<()> {
    if min > max {
        return Err(InsightsError::InvalidRangeError { min, max });
    }
    Ok(())
}
