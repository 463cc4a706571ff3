use clap::Parser;
use job_insights::config::{CliConfig, Command};
use job_insights::core::{counter, salaries};
use job_insights::domain::model::{JobRecord, SalaryQuery, MAX_SALARY, MIN_SALARY};
use job_insights::utils::logger;
use job_insights::{CsvJobSource, JobSource, Result};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting job-insights CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let source = CsvJobSource::new();

    match run(&source, &config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Query failed: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(source: &dyn JobSource, config: &CliConfig) -> Result<String> {
    match &config.command {
        Command::MaxSalary => {
            let records = source.read(&config.input)?;
            let value = salaries::get_max_salary(&records)?;
            render_amount(config.json, "max_salary", value)
        }
        Command::MinSalary => {
            let records = source.read(&config.input)?;
            let value = salaries::get_min_salary(&records)?;
            render_amount(config.json, "min_salary", value)
        }
        Command::Filter { salary } => {
            let records = source.read(&config.input)?;
            let matched =
                salaries::filter_by_salary_range(&records, &SalaryQuery::from(salary.as_str()))?;
            render_listings(config.json, &matched)
        }
        Command::Matches { salary, min, max } => {
            let job =
                JobRecord::from_pairs([(MIN_SALARY, min.as_str()), (MAX_SALARY, max.as_str())]);
            let matched =
                salaries::matches_salary_range(&job, &SalaryQuery::from(salary.as_str()))?;
            if config.json {
                Ok(serde_json::json!({ "matches": matched }).to_string())
            } else {
                Ok(matched.to_string())
            }
        }
        Command::Count { word } => {
            let records = source.read(&config.input)?;
            let count = counter::count_occurrences(&records, word);
            if config.json {
                Ok(serde_json::json!({ "word": word, "count": count }).to_string())
            } else {
                Ok(format!("{} occurrences of {:?}", count, word))
            }
        }
    }
}

fn render_amount(json: bool, field: &str, value: i64) -> Result<String> {
    if json {
        let mut object = serde_json::Map::new();
        object.insert(field.to_string(), serde_json::Value::from(value));
        Ok(serde_json::Value::Object(object).to_string())
    } else {
        Ok(value.to_string())
    }
}

fn render_listings(json: bool, listings: &[JobRecord]) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(listings)?);
    }

    let mut lines = vec![format!("{} matching listings", listings.len())];
    for job in listings {
        let mut pairs: Vec<String> = job
            .fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        pairs.sort();
        lines.push(pairs.join(", "));
    }
    Ok(lines.join("\n"))
}
