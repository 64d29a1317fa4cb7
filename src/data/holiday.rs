use crate::calc::{CalendarError, DEFAULT_DATE_FORMAT, parse_date};
use crate::data::persistence::Persistable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A holiday that applies on one specific date, e.g. a festival whose date
/// moves from year to year. Dates are stored as `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Holiday {
    pub name: String,
    pub date: String,
}

impl Holiday {
    pub fn new(name: &str, date: &str) -> Self {
        Holiday {
            name: name.to_string(),
            date: date.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct HolidayData {
    pub holidays: Vec<Holiday>,
}

impl Persistable for HolidayData {
    fn filename() -> &'static str {
        "holidays.yaml"
    }
}

impl HolidayData {
    pub fn add(&mut self, holiday: Holiday) {
        self.holidays.push(holiday);
    }

    /// Parses every holiday date; the first bad entry fails the whole list.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, CalendarError> {
        self.holidays
            .iter()
            .map(|h| parse_date(&h.date, DEFAULT_DATE_FORMAT))
            .collect()
    }

    /// Holiday names keyed by date. Entries with unparsable dates are skipped.
    pub fn get_holiday_map(&self) -> HashMap<NaiveDate, &Holiday> {
        let mut map = HashMap::new();
        for h in &self.holidays {
            if let Ok(date) = parse_date(&h.date, DEFAULT_DATE_FORMAT) {
                map.insert(date, h);
            }
        }
        map
    }
}

/// Year-specific festival holidays written by `init`.
pub fn festival_holidays_2024() -> HolidayData {
    let mut data = HolidayData::default();
    data.add(Holiday::new("Holi", "2024-03-25"));
    data.add(Holiday::new("Janmashtami", "2024-08-19"));
    data.add(Holiday::new("Diwali", "2024-10-31"));
    data
}
