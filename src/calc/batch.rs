use crate::calc::dates::DateAdapter;
use crate::calc::error::CalendarError;
use crate::calc::workday::WorkingDayCalculator;
use anyhow::{Result, bail};
use serde_json::{Map, Value};

pub const START_COLUMN: &str = "Start_Date";
pub const END_COLUMN: &str = "End_Date";
pub const RESULT_COLUMN: &str = "Working_Days";
pub const ERROR_COLUMN: &str = "Error";

const REQUIRED_COLUMNS: [&str; 2] = [START_COLUMN, END_COLUMN];

/// One input row: column name -> cell value.
pub type Record = Map<String, Value>;

/// A row with both date columns present. The full record is kept so the
/// other columns pass through to the output untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRangeRow {
    pub start: String,
    pub end: String,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowResult {
    pub record: Record,
    pub working_days: Option<u32>,
    pub error: Option<String>,
}

impl RowResult {
    /// The input record with the result column (and error column, when the
    /// row failed) appended.
    pub fn into_record(self) -> Record {
        let mut record = self.record;
        let days = match self.working_days {
            Some(n) => Value::from(n),
            None => Value::Null,
        };
        record.insert(RESULT_COLUMN.to_string(), days);
        if let Some(err) = self.error {
            record.insert(ERROR_COLUMN.to_string(), Value::String(err));
        }
        record
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub total_rows: usize,
    pub processed: usize,
    pub failed: usize,
    /// Mean over rows that produced a count; `None` when none did.
    pub average_working_days: Option<f64>,
}

/// Checks that every record carries the date columns and pulls them out.
///
/// All missing columns are reported together, in the order they are required.
pub fn parse_rows(records: Vec<Record>) -> Result<Vec<DateRangeRow>> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| records.iter().any(|r| !r.contains_key(*col)))
        .collect();
    if !missing.is_empty() {
        bail!("Missing required columns: {}", missing.join(", "));
    }

    Ok(records
        .into_iter()
        .map(|record| DateRangeRow {
            start: cell_text(&record[START_COLUMN]),
            end: cell_text(&record[END_COLUMN]),
            record,
        })
        .collect())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn count_row(
    calc: &WorkingDayCalculator,
    adapter: &DateAdapter,
    row: &DateRangeRow,
) -> Result<u32, CalendarError> {
    let start = adapter.parse(&row.start)?;
    let end = adapter.parse(&row.end)?;
    Ok(calc.calculate_working_days(start, end))
}

/// Runs the calculator over every row. A row that fails keeps its error
/// message and gets no count; the remaining rows are still processed.
pub fn process_rows(
    calc: &WorkingDayCalculator,
    adapter: &DateAdapter,
    rows: Vec<DateRangeRow>,
) -> Vec<RowResult> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match count_row(calc, adapter, &row) {
            Ok(days) => RowResult {
                record: row.record,
                working_days: Some(days),
                error: None,
            },
            Err(e) => {
                tracing::warn!(row = i + 1, value = e.value(), error = %e, "row not counted");
                RowResult {
                    record: row.record,
                    working_days: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}

pub fn summarize(results: &[RowResult]) -> BatchSummary {
    let counts: Vec<u32> = results.iter().filter_map(|r| r.working_days).collect();
    let average_working_days = if counts.is_empty() {
        None
    } else {
        Some(counts.iter().map(|&n| n as f64).sum::<f64>() / counts.len() as f64)
    };
    BatchSummary {
        total_rows: results.len(),
        processed: counts.len(),
        failed: results.len() - counts.len(),
        average_working_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    fn rows(values: Vec<Value>) -> Vec<DateRangeRow> {
        parse_rows(values.into_iter().map(record).collect()).unwrap()
    }

    fn festival_calculator() -> WorkingDayCalculator {
        let d = |m, day| chrono::NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        WorkingDayCalculator::default().with_custom_holidays([d(3, 25), d(10, 31), d(8, 19)])
    }

    #[test]
    fn test_parse_rows_reports_all_missing_columns() {
        let records = vec![record(json!({"Name": "a"}))];
        let err = parse_rows(records).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required columns: Start_Date, End_Date"
        );
    }

    #[test]
    fn test_parse_rows_reports_column_missing_from_any_row() {
        let records = vec![
            record(json!({"Start_Date": "2024-01-01", "End_Date": "2024-01-31"})),
            record(json!({"Start_Date": "2024-02-01"})),
        ];
        let err = parse_rows(records).unwrap_err();
        assert_eq!(err.to_string(), "Missing required columns: End_Date");
    }

    #[test]
    fn test_parse_rows_empty_input() {
        assert!(parse_rows(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_process_rows_sample_months() {
        let calc = festival_calculator();
        let input = rows(vec![
            json!({"Start_Date": "2024-01-01", "End_Date": "2024-01-31"}),
            json!({"Start_Date": "2024-02-01", "End_Date": "2024-02-28"}),
            json!({"Start_Date": "2024-03-01", "End_Date": "2024-03-31"}),
        ]);
        let results = process_rows(&calc, &DateAdapter::default(), input);
        let counts: Vec<Option<u32>> = results.iter().map(|r| r.working_days).collect();
        // January: 23 weekdays minus Jan 1 and Jan 26; March: 21 weekdays minus Holi
        assert_eq!(counts, vec![Some(21), Some(20), Some(20)]);
    }

    #[test]
    fn test_process_rows_isolates_bad_row() {
        let calc = WorkingDayCalculator::default();
        let input = rows(vec![
            json!({"Start_Date": "2024-13-01", "End_Date": "2024-01-31"}),
            json!({"Start_Date": "2024-01-01", "End_Date": "2024-01-07"}),
        ]);
        let results = process_rows(&calc, &DateAdapter::default(), input);
        assert_eq!(results[0].working_days, None);
        assert!(results[0].error.as_deref().unwrap().contains("2024-13-01"));
        assert_eq!(results[1].working_days, Some(4));
        assert_eq!(results[1].error, None);
    }

    #[test]
    fn test_process_rows_accepts_datetime_cells() {
        let calc = WorkingDayCalculator::default();
        let input = rows(vec![json!({
            "Start_Date": "2024-01-07T00:00:00",
            "End_Date": "2024-01-01T00:00:00"
        })]);
        let results = process_rows(&calc, &DateAdapter::default(), input);
        assert_eq!(results[0].working_days, Some(4));
    }

    #[test]
    fn test_process_rows_month_first_format_rejects_month_13() {
        let calc = WorkingDayCalculator::default();
        let input = rows(vec![json!({"Start_Date": "13/02/2024", "End_Date": "02/28/2024"})]);
        let results = process_rows(&calc, &DateAdapter::new("%m/%d/%Y"), input);
        let expected = CalendarError::InvalidDate {
            value: "13/02/2024".to_string(),
        }
        .to_string();
        assert_eq!(results[0].working_days, None);
        assert_eq!(results[0].error.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn test_null_cell_is_a_row_error() {
        let calc = WorkingDayCalculator::default();
        let input = rows(vec![json!({"Start_Date": null, "End_Date": "2024-01-07"})]);
        let results = process_rows(&calc, &DateAdapter::default(), input);
        assert!(results[0].error.is_some());
    }

    #[test]
    fn test_into_record_keeps_extra_columns() {
        let calc = WorkingDayCalculator::default();
        let input = rows(vec![json!({
            "Employee": "A. Rao",
            "Start_Date": "2024-02-01",
            "End_Date": "2024-02-28"
        })]);
        let out = process_rows(&calc, &DateAdapter::default(), input)
            .remove(0)
            .into_record();
        assert_eq!(out["Employee"], json!("A. Rao"));
        assert_eq!(out[RESULT_COLUMN], json!(20));
        assert!(!out.contains_key(ERROR_COLUMN));
    }

    #[test]
    fn test_into_record_failed_row_has_null_count_and_error() {
        let result = RowResult {
            record: Record::new(),
            working_days: None,
            error: Some("bad".to_string()),
        };
        let out = result.into_record();
        assert_eq!(out[RESULT_COLUMN], Value::Null);
        assert_eq!(out[ERROR_COLUMN], json!("bad"));
    }

    #[test]
    fn test_summarize_counts_and_average() {
        let calc = WorkingDayCalculator::default();
        let input = rows(vec![
            json!({"Start_Date": "2024-01-01", "End_Date": "2024-01-07"}),
            json!({"Start_Date": "2024-02-01", "End_Date": "2024-02-28"}),
            json!({"Start_Date": "oops", "End_Date": "2024-02-28"}),
        ]);
        let summary = summarize(&process_rows(&calc, &DateAdapter::default(), input));
        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.average_working_days, Some(12.0));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_rows, 0);
        assert_eq!(summary.average_working_days, None);
    }
}
