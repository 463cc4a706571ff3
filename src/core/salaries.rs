use crate::domain::model::{JobRecord, SalaryQuery, MAX_SALARY, MIN_SALARY};
use crate::utils::error::{InsightsError, Result};
use crate::utils::validation;

/// Salary values of `field` across all records, keeping only non-negative
/// integer literals. Missing fields and placeholders like "Não informado"
/// are skipped, not errors.
fn numeric_column(records: &[JobRecord], field: &'static str) -> Vec<i64> {
    records
        .iter()
        .filter_map(|job| job.get(field))
        .filter(|value| validation::is_numeric_literal(value))
        .filter_map(|value| value.parse().ok())
        .collect()
}

/// The highest `max_salary` across all listings with a numeric one.
pub fn get_max_salary(records: &[JobRecord]) -> Result<i64> {
    numeric_column(records, MAX_SALARY)
        .into_iter()
        .max()
        .ok_or_else(|| InsightsError::EmptyAggregateError {
            field: MAX_SALARY.to_string(),
        })
}

/// The lowest `min_salary` across all listings with a numeric one.
pub fn get_min_salary(records: &[JobRecord]) -> Result<i64> {
    numeric_column(records, MIN_SALARY)
        .into_iter()
        .min()
        .ok_or_else(|| InsightsError::EmptyAggregateError {
            field: MIN_SALARY.to_string(),
        })
}

fn salary_bounds(job: &JobRecord) -> Result<(i64, i64)> {
    let min = validation::parse_salary(MIN_SALARY, job.require(MIN_SALARY)?)?;
    let max = validation::parse_salary(MAX_SALARY, job.require(MAX_SALARY)?)?;
    validation::validate_salary_ordering(min, max)?;
    Ok((min, max))
}

/// Checks whether `salary` falls inside the job's closed interval
/// [min_salary, max_salary].
///
/// Errors when either bound is missing (`MissingFieldError`), when any of
/// the three values is not integer-representable (`NonNumericValueError`),
/// or when min_salary exceeds max_salary (`InvalidRangeError`).
pub fn matches_salary_range(job: &JobRecord, salary: &SalaryQuery) -> Result<bool> {
    let (min, max) = salary_bounds(job)?;
    let salary = salary.amount()?;
    Ok(min <= salary && salary <= max)
}

/// Jobs whose salary range contains `salary`.
///
/// Fails fast: the first job with missing or malformed salary bounds aborts
/// the whole filter with its validation error. No partial result is returned.
pub fn filter_by_salary_range(jobs: &[JobRecord], salary: &SalaryQuery) -> Result<Vec<JobRecord>> {
    let salary = salary.amount()?;
    let mut matched = Vec::new();
    for job in jobs {
        let (min, max) = salary_bounds(job)?;
        if min <= salary && salary <= max {
            matched.push(job.clone());
        }
    }
    tracing::debug!("{} of {} listings match salary {}", matched.len(), jobs.len(), salary);
    Ok(matched)
}
