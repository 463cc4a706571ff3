pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::CsvJobSource;
pub use config::CliConfig;
pub use domain::model::{JobRecord, SalaryQuery};
pub use domain::ports::JobSource;
pub use utils::error::{InsightsError, Result};
