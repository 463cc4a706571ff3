use job_insights::core::{counter, salaries};
use job_insights::{CsvJobSource, InsightsError, JobSource, SalaryQuery};
use std::path::Path;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_end_to_end_salary_queries_over_csv() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        &temp_dir,
        "jobs.csv",
        "title,min_salary,max_salary\n\
         Backend Developer,1000,2000\n\
         Data Engineer,3000,4000\n\
         Internship,Não informado,Não informado\n",
    );

    let source = CsvJobSource::new();
    let records = source.read(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].get("title"), Some("Backend Developer"));

    assert_eq!(salaries::get_max_salary(&records).unwrap(), 4000);
    assert_eq!(salaries::get_min_salary(&records).unwrap(), 1000);
    assert_eq!(counter::count_occurrences(&records, "engineer"), 1);
}

#[test]
fn test_filter_over_clean_csv() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        &temp_dir,
        "jobs.csv",
        "title,min_salary,max_salary\n\
         Backend Developer,1000,2000\n\
         Data Engineer,3000,4000\n",
    );

    let records = CsvJobSource::new().read(&path).unwrap();

    let matched = salaries::filter_by_salary_range(&records, &SalaryQuery::from(3500)).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].get("title"), Some("Data Engineer"));
}

#[test]
fn test_filter_aborts_on_malformed_row() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        &temp_dir,
        "jobs.csv",
        "title,min_salary,max_salary\n\
         Backend Developer,1000,2000\n\
         Internship,Não informado,Não informado\n",
    );

    let records = CsvJobSource::new().read(&path).unwrap();

    let err = salaries::filter_by_salary_range(&records, &SalaryQuery::from(1500)).unwrap_err();
    assert!(matches!(err, InsightsError::NonNumericValueError { .. }));
}

#[test]
fn test_aggregate_over_all_non_numeric_column() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        &temp_dir,
        "jobs.csv",
        "title,min_salary,max_salary\n\
         Job A,Não informado,2000\n\
         Job B,a combinar,3000\n",
    );

    let records = CsvJobSource::new().read(&path).unwrap();

    assert!(matches!(
        salaries::get_min_salary(&records).unwrap_err(),
        InsightsError::EmptyAggregateError { .. }
    ));
    assert_eq!(salaries::get_max_salary(&records).unwrap(), 3000);
}

#[test]
fn test_read_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does_not_exist.csv");
    assert!(!Path::new(&path).exists());

    let result = CsvJobSource::new().read(path.to_str().unwrap());
    assert!(result.is_err());
}
