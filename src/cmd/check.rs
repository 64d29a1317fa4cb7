use crate::calc::{DayKind, MonthDay, parse_date};
use crate::data::{HolidayData, RegionConfig};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};

pub fn run(date: &str, end: Option<&str>) -> Result<()> {
    let loaded = super::load()?;
    let format = &loaded.region.date_format;
    let start = parse_date(date, format)?;
    let end = match end {
        Some(e) => parse_date(e, format)?,
        None => start,
    };
    let days = loaded.calculator.day_breakdown(start, end);
    write_breakdown(&days, &loaded.region, &loaded.holidays, &mut std::io::stdout())
}

pub(crate) fn write_breakdown<W: std::io::Write>(
    days: &[(NaiveDate, DayKind)],
    region: &RegionConfig,
    holidays: &HolidayData,
    out: &mut W,
) -> Result<()> {
    let custom_names = holidays.get_holiday_map();
    writeln!(out, "Region: {}", region.name)?;
    writeln!(out, "---")?;
    for (date, kind) in days {
        let name = match kind {
            DayKind::FixedHoliday => region.fixed_holiday_name(MonthDay::of(*date)),
            DayKind::CustomHoliday => custom_names.get(date).map(|h| h.name.as_str()),
            _ => None,
        };
        match name {
            Some(name) => writeln!(
                out,
                "  {:<12} {:<4} {} ({})",
                date.format("%Y-%m-%d").to_string(),
                date.weekday().to_string(),
                kind,
                name
            )?,
            None => writeln!(
                out,
                "  {:<12} {:<4} {}",
                date.format("%Y-%m-%d").to_string(),
                date.weekday().to_string(),
                kind
            )?,
        }
    }
    let working = days.iter().filter(|(_, k)| k.is_working()).count();
    writeln!(out, "---")?;
    writeln!(out, "Working days: {} of {}", working, days.len())?;
    Ok(())
}
