use crate::calc::workday::{DEFAULT_FIXED_HOLIDAYS, DEFAULT_WEEKEND_DAYS};
use crate::calc::{CalendarError, DEFAULT_DATE_FORMAT, MonthDay, WorkingDayCalculator};
use crate::data::holiday::HolidayData;
use crate::data::persistence::Persistable;
use anyhow::Result;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A holiday falling on the same month and day every year.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FixedHoliday {
    pub name: String,
    pub month: u32,
    pub day: u32,
}

impl FixedHoliday {
    pub fn new(name: &str, month: u32, day: u32) -> Self {
        FixedHoliday {
            name: name.to_string(),
            month,
            day,
        }
    }

    pub fn month_day(&self) -> Result<MonthDay, CalendarError> {
        MonthDay::new(self.month, self.day)
    }
}

/// Weekend pattern, recurring holidays and input date format of the region
/// being modelled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegionConfig {
    pub name: String,
    pub weekend_days: Vec<Weekday>,
    pub fixed_holidays: Vec<FixedHoliday>,
    pub date_format: String,
}

const DEFAULT_FIXED_HOLIDAY_NAMES: [&str; 5] = [
    "New Year's Day",
    "Republic Day",
    "Independence Day",
    "Gandhi Jayanti",
    "Christmas",
];

impl Default for RegionConfig {
    fn default() -> Self {
        RegionConfig {
            name: "India".to_string(),
            weekend_days: DEFAULT_WEEKEND_DAYS.to_vec(),
            fixed_holidays: DEFAULT_FIXED_HOLIDAYS
                .iter()
                .zip(DEFAULT_FIXED_HOLIDAY_NAMES)
                .map(|(&(month, day), name)| FixedHoliday::new(name, month, day))
                .collect(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Wrapper that reads the `region` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub(crate) region: RegionConfig,
}

impl Persistable for ConfigFile {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl RegionConfig {
    pub fn load() -> Result<Self> {
        Ok(ConfigFile::load()?.region)
    }

    /// Builds a calculator for this region with `holidays` already added.
    pub fn calculator(&self, holidays: &HolidayData) -> Result<WorkingDayCalculator, CalendarError> {
        let fixed = self
            .fixed_holidays
            .iter()
            .map(FixedHoliday::month_day)
            .collect::<Result<Vec<_>, _>>()?;
        let custom = holidays.dates()?;
        tracing::debug!(
            region = %self.name,
            fixed = fixed.len(),
            custom = custom.len(),
            "building calculator"
        );
        Ok(
            WorkingDayCalculator::with_config(self.weekend_days.iter().copied(), fixed)
                .with_custom_holidays(custom),
        )
    }

    pub fn fixed_holiday_name(&self, md: MonthDay) -> Option<&str> {
        self.fixed_holidays
            .iter()
            .find(|h| h.month == md.month() && h.day == md.day())
            .map(|h| h.name.as_str())
    }
}
