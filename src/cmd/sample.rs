use crate::calc::Record;
use crate::calc::batch::{END_COLUMN, START_COLUMN};
use crate::data::persistence::write_file;
use anyhow::Result;
use serde_json::Value;
use std::path::Path;

const SAMPLE_RANGES: [(&str, &str); 3] = [
    ("2024-01-01", "2024-01-31"),
    ("2024-02-01", "2024-02-28"),
    ("2024-03-01", "2024-03-31"),
];

pub fn run(output: &Path) -> Result<()> {
    write_file(&sample_records(), output)?;
    println!("Sample file written to {}", output.display());
    Ok(())
}

pub(crate) fn sample_records() -> Vec<Record> {
    SAMPLE_RANGES
        .iter()
        .map(|&(start, end)| {
            let mut record = Record::new();
            record.insert(START_COLUMN.to_string(), Value::from(start));
            record.insert(END_COLUMN.to_string(), Value::from(end));
            record
        })
        .collect()
}
