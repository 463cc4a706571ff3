use crate::domain::model::JobRecord;
use crate::utils::error::Result;

/// Provider of raw job records. The core salary queries never perform I/O
/// themselves; they operate on whatever a source hands them.
pub trait JobSource {
    fn read(&self, path: &str) -> Result<Vec<JobRecord>>;
}
