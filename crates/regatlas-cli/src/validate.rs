//! # Validate — Check dataset structural invariants.
//!
//! Re-parses the raw `countries.json` document and reports every problem it
//! finds instead of stopping at the first one: invalid jurisdiction keys,
//! records that fail to deserialize, sources without usable URLs, and
//! `lastUpdated` values that are not calendar dates.
//!
//! Exit code 0 means the dataset is clean; 1 means at least one problem was
//! reported.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use regatlas_core::{CountryCode, CountryRecord};

use crate::countries_path;

/// Validate subcommand arguments.
#[derive(Args, Debug)]
pub struct ValidateArgs {}

/// Execute the validate subcommand.
pub fn run_validate(_args: &ValidateArgs, data_dir: &Path) -> Result<u8> {
    let path = countries_path(data_dir);
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;

    let problems = validate_document(&raw)?;
    if problems.is_empty() {
        println!("Dataset is valid");
        return Ok(0);
    }

    for problem in &problems {
        eprintln!("{problem}");
    }
    eprintln!("{} problem(s) found", problems.len());
    Ok(1)
}

/// Validate the raw dataset document, collecting every problem found.
pub fn validate_document(raw: &str) -> Result<Vec<String>> {
    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(raw).context("dataset document is not a JSON object")?;

    let mut problems = Vec::new();
    for (key, value) in &entries {
        if let Err(e) = CountryCode::new(key.clone()) {
            problems.push(format!("{key}: invalid jurisdiction key ({e})"));
            continue;
        }
        let record: CountryRecord = match serde_json::from_value(value.clone()) {
            Ok(record) => record,
            Err(e) => {
                problems.push(format!("{key}: record does not parse ({e})"));
                continue;
            }
        };
        check_record(key, &record, &mut problems);
    }
    Ok(problems)
}

fn check_record(key: &str, record: &CountryRecord, problems: &mut Vec<String>) {
    for (i, source) in record.sources.iter().enumerate() {
        if source.name.trim().is_empty() {
            problems.push(format!("{key}: source[{i}] has an empty name"));
        }
        if !(source.url.starts_with("http://") || source.url.starts_with("https://")) {
            problems.push(format!("{key}: source[{i}] URL is not absolute: {:?}", source.url));
        }
    }

    for (i, regulation) in record.regulations.iter().enumerate() {
        if regulation.title.trim().is_empty() {
            problems.push(format!("{key}: regulation[{i}] has an empty title"));
        }
        if let Some(date) = &regulation.effective_date {
            check_date(key, &format!("regulation[{i}].effectiveDate"), date, problems);
        }
    }

    if let Some(date) = &record.last_updated {
        check_date(key, "lastUpdated", date, problems);
    }
}

fn check_date(key: &str, field: &str, value: &str, problems: &mut Vec<String>) {
    if chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        problems.push(format!("{key}: {field} is not a YYYY-MM-DD date: {value:?}"));
    }
}
