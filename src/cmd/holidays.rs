use crate::calc::WorkingDayCalculator;
use crate::data::{HolidayData, RegionConfig};
use anyhow::Result;

pub fn run() -> Result<()> {
    let loaded = super::load()?;
    write_holidays(
        &loaded.region,
        &loaded.holidays,
        &loaded.calculator,
        &mut std::io::stdout(),
    )
}

/// Lists the configured holidays. The totals come from `calc`, so dates
/// listed twice in the files are counted once.
pub(crate) fn write_holidays<W: std::io::Write>(
    region: &RegionConfig,
    data: &HolidayData,
    calc: &WorkingDayCalculator,
    out: &mut W,
) -> Result<()> {
    let weekend: Vec<String> = region.weekend_days.iter().map(|w| w.to_string()).collect();
    writeln!(out, "Holidays for {}", region.name)?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<14} {}", "Weekend:", weekend.join(", "))?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<14} {}", "Every year", "Name")?;
    for h in &region.fixed_holidays {
        writeln!(out, "  {:<14} {}", format!("{:02}-{:02}", h.month, h.day), h.name)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "  {:<14} {}", "Date", "Name")?;
    for h in &data.holidays {
        writeln!(out, "  {:<14} {}", h.date, h.name)?;
    }
    writeln!(out, "---")?;
    writeln!(
        out,
        "Total: {} fixed, {} dated holiday(s)",
        calc.fixed_holidays().count(),
        calc.custom_holidays().count()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::holiday::{Holiday, festival_holidays_2024};

    fn make_data(holidays: Vec<Holiday>) -> HolidayData {
        HolidayData { holidays }
    }

    fn render(region: &RegionConfig, data: &HolidayData) -> String {
        let calc = region.calculator(data).unwrap();
        let mut buf = Vec::new();
        write_holidays(region, data, &calc, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_holidays_defaults_without_custom() {
        let out = render(&RegionConfig::default(), &make_data(vec![]));
        assert!(out.contains("Holidays for India"));
        assert!(out.contains("Sat, Sun"));
        assert!(out.contains("01-26"));
        assert!(out.contains("Gandhi Jayanti"));
        assert!(out.contains("Total: 5 fixed, 0 dated holiday(s)"));
    }

    #[test]
    fn test_write_holidays_lists_custom() {
        let out = render(&RegionConfig::default(), &festival_holidays_2024());
        assert!(out.contains("2024-08-19"));
        assert!(out.contains("Janmashtami"));
        assert!(out.contains("Total: 5 fixed, 3 dated holiday(s)"));
    }

    #[test]
    fn test_write_holidays_custom_region() {
        let mut region = RegionConfig::default();
        region.name = "Nowhere".to_string();
        region.fixed_holidays.clear();
        region.weekend_days = vec![chrono::Weekday::Sun];
        let out = render(&region, &make_data(vec![]));
        assert!(out.contains("Holidays for Nowhere"));
        assert!(out.contains("Sun"));
        assert!(!out.contains("Sat"));
        assert!(out.contains("Total: 0 fixed"));
    }

    #[test]
    fn test_write_holidays_counts_repeated_dates_once() {
        let data = make_data(vec![
            Holiday::new("Holi", "2024-03-25"),
            Holiday::new("Holi (observed)", "2024-03-25"),
        ]);
        let out = render(&RegionConfig::default(), &data);
        assert!(out.contains("Holi (observed)"));
        assert!(out.contains("Total: 5 fixed, 1 dated holiday(s)"));
    }
}
