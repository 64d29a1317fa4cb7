use anyhow::Result;

pub fn run(start: &str, end: &str, format: Option<&str>) -> Result<()> {
    let loaded = super::load()?;
    let format = format.unwrap_or(loaded.region.date_format.as_str());
    let days = loaded.calculator.calculate_working_days_str(start, end, format)?;
    tracing::info!(start, end, days, "range counted");
    write_count(start, end, days, &mut std::io::stdout())
}

pub(crate) fn write_count<W: std::io::Write>(
    start: &str,
    end: &str,
    days: u32,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Working days from {} to {}: {}", start.trim(), end.trim(), days)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_count_includes_range_and_total() {
        let mut buf = Vec::new();
        write_count("2024-01-01", "2024-01-07", 4, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "Working days from 2024-01-01 to 2024-01-07: 4\n");
    }

    #[test]
    fn test_write_count_zero() {
        let mut buf = Vec::new();
        write_count("2024-03-25", "2024-03-25", 0, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.ends_with(": 0\n"));
    }
}
