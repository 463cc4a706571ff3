use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::error::{InsightsError, Result};
use crate::utils::validation;

pub const MIN_SALARY: &str = "min_salary";
pub const MAX_SALARY: &str = "max_salary";

/// One row of job-listing data. Values stay raw strings as read from the
/// source; salary fields are only parsed at the point of use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRecord {
    pub fields: HashMap<String, String>,
}

impl JobRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn require(&self, field: &str) -> Result<&str> {
        self.get(field).ok_or_else(|| InsightsError::MissingFieldError {
            field: field.to_string(),
        })
    }
}

/// A salary to test against a listing's range, either an integer or raw
/// text still to be parsed. Text is validated where it is used, so a bad
/// query surfaces as a `NonNumericValueError` rather than a construction
/// failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SalaryQuery {
    Amount(i64),
    Text(String),
}

impl SalaryQuery {
    pub fn amount(&self) -> Result<i64> {
        match self {
            Self::Amount(value) => Ok(*value),
            Self::Text(raw) => validation::parse_salary("salary", raw),
        }
    }
}

impl From<i64> for SalaryQuery {
    fn from(value: i64) -> Self {
        Self::Amount(value)
    }
}

impl From<&str> for SalaryQuery {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SalaryQuery {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
