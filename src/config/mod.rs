use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "job-insights")]
#[command(about = "Salary statistics over job-listing CSV files")]
pub struct CliConfig {
    /// Path to the job listings CSV file
    #[arg(long, default_value = "data/jobs.csv")]
    pub input: String,

    /// Emit results as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Highest max_salary across all listings
    MaxSalary,

    /// Lowest min_salary across all listings
    MinSalary,

    /// Listings whose salary range contains the given salary
    Filter {
        #[arg(long)]
        salary: String,
    },

    /// Check a salary against an ad-hoc min/max range
    Matches {
        #[arg(long)]
        salary: String,

        #[arg(long)]
        min: String,

        #[arg(long)]
        max: String,
    },

    /// Count case-insensitive occurrences of a word across all fields
    Count {
        #[arg(long)]
        word: String,
    },
}
