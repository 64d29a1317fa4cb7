use crate::calc::{BatchSummary, DateAdapter, Record, WorkingDayCalculator};
use crate::calc::{parse_rows, process_rows, summarize};
use crate::data::persistence::{read_file, write_file};
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(input: &Path, output: Option<&Path>, format: Option<&str>) -> Result<()> {
    let loaded = super::load()?;
    let adapter = DateAdapter::new(format.unwrap_or(loaded.region.date_format.as_str()));
    let (records, summary) = process_file(&loaded.calculator, &adapter, input)?;

    match output {
        Some(path) => {
            write_file(&records, path)?;
            tracing::info!(path = %path.display(), rows = records.len(), "results written");
            println!("Results written to {}", path.display());
            write_summary(&summary, &mut std::io::stdout())
        }
        None => {
            let json = serde_json::to_string_pretty(&records).context("failed to serialize JSON")?;
            println!("{}", json);
            write_summary(&summary, &mut std::io::stderr())
        }
    }
}

/// Reads the row file at `input` and returns the output records together
/// with the run summary.
pub(crate) fn process_file(
    calc: &WorkingDayCalculator,
    adapter: &DateAdapter,
    input: &Path,
) -> Result<(Vec<Record>, BatchSummary)> {
    let records: Vec<Record> = read_file(input)?;
    let rows = parse_rows(records)
        .with_context(|| format!("error processing file {}", input.display()))?;
    tracing::info!(
        rows = rows.len(),
        input = %input.display(),
        formats = ?adapter.formats(),
        "processing rows"
    );
    let results = process_rows(calc, adapter, rows);
    let summary = summarize(&results);
    let records = results.into_iter().map(|r| r.into_record()).collect();
    Ok((records, summary))
}

pub(crate) fn write_summary<W: std::io::Write>(summary: &BatchSummary, out: &mut W) -> Result<()> {
    writeln!(out, "Summary")?;
    writeln!(out, "---")?;
    writeln!(out, "{:<26} {}", "Total rows processed:", summary.total_rows)?;
    writeln!(out, "{:<26} {}", "Rows counted:", summary.processed)?;
    match summary.average_working_days {
        Some(avg) => writeln!(out, "{:<26} {:.1}", "Average working days:", avg)?,
        None => writeln!(out, "{:<26} N/A", "Average working days:")?,
    }
    if summary.failed > 0 {
        writeln!(out, "{:<26} {}", "Rows with errors:", summary.failed)?;
    }
    writeln!(out, "---")?;
    Ok(())
}
