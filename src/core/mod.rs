pub mod counter;
pub mod salaries;

pub use crate::domain::model::{JobRecord, SalaryQuery};
pub use crate::domain::ports::JobSource;
pub use crate::utils::error::Result;
