use std::collections::HashMap;

use crate::domain::model::JobRecord;
use crate::domain::ports::JobSource;
use crate::utils::error::Result;

/// Reads job records from a headered CSV file on local disk, one record per
/// row. Every value is kept as a raw string.
#[derive(Debug, Clone, Default)]
pub struct CsvJobSource;

impl CsvJobSource {
    pub fn new() -> Self {
        Self
    }
}

impl JobSource for CsvJobSource {
    fn read(&self, path: &str) -> Result<Vec<JobRecord>> {
        tracing::debug!("Reading job records from {}", path);

        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<HashMap<String, String>>() {
            records.push(JobRecord::new(row?));
        }

        tracing::debug!("Read {} job records", records.len());
        Ok(records)
    }
}
