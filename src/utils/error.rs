use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing field: {field}")]
    MissingFieldError { field: String },

    #[error("Field {field} does not represent a valid integer: {value:?}")]
    NonNumericValueError { field: String, value: String },

    #[error("Invalid salary range: min_salary {min} is greater than max_salary {max}")]
    InvalidRangeError { min: i64, max: i64 },

    #[error("No record has a numeric {field} value")]
    EmptyAggregateError { field: String },
}

pub type Result<T> = std::result::Result<T, InsightsError>;
