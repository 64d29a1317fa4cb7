use crate::calc::dates::parse_date;
use crate::calc::error::CalendarError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;
use std::fmt;

/// A month/day pair that recurs every year, e.g. January 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Rejects pairs that never occur. February 29 is allowed and only
    /// matches leap years.
    pub fn new(month: u32, day: u32) -> Result<Self, CalendarError> {
        // 2000 is a leap year, so every day that exists in some year exists here.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(CalendarError::InvalidDate {
                value: format!("{:02}-{:02}", month, day),
            });
        }
        Ok(MonthDay { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn of(date: NaiveDate) -> Self {
        MonthDay {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Why a date is or is not a working day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayKind {
    Working,
    Weekend,
    FixedHoliday,
    CustomHoliday,
}

impl DayKind {
    pub fn is_working(self) -> bool {
        self == DayKind::Working
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayKind::Working => "Working day",
            DayKind::Weekend => "Weekend",
            DayKind::FixedHoliday => "Fixed holiday",
            DayKind::CustomHoliday => "Custom holiday",
        };
        f.write_str(label)
    }
}

pub const DEFAULT_WEEKEND_DAYS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// New Year's Day, Republic Day, Independence Day, Gandhi Jayanti, Christmas.
pub const DEFAULT_FIXED_HOLIDAYS: [(u32, u32); 5] = [(1, 1), (1, 26), (8, 15), (10, 2), (12, 25)];

pub fn default_fixed_holidays() -> Vec<MonthDay> {
    DEFAULT_FIXED_HOLIDAYS
        .iter()
        .map(|&(month, day)| MonthDay { month, day })
        .collect()
}

/// Decides which calendar days are working days for one region.
///
/// The weekend and fixed-holiday sets are fixed at construction; only the
/// year-specific custom holidays can grow afterwards.
#[derive(Clone, Debug)]
pub struct WorkingDayCalculator {
    weekend_days: BTreeSet<u32>,
    fixed_holidays: BTreeSet<MonthDay>,
    custom_holidays: BTreeSet<NaiveDate>,
}

impl Default for WorkingDayCalculator {
    fn default() -> Self {
        WorkingDayCalculator::with_config(DEFAULT_WEEKEND_DAYS, default_fixed_holidays())
    }
}

impl WorkingDayCalculator {
    pub fn with_config(
        weekend_days: impl IntoIterator<Item = Weekday>,
        fixed_holidays: impl IntoIterator<Item = MonthDay>,
    ) -> Self {
        WorkingDayCalculator {
            weekend_days: weekend_days
                .into_iter()
                .map(|w| w.num_days_from_monday())
                .collect(),
            fixed_holidays: fixed_holidays.into_iter().collect(),
            custom_holidays: BTreeSet::new(),
        }
    }

    pub fn with_custom_holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.add_custom_holidays(dates);
        self
    }

    pub fn fixed_holidays(&self) -> impl Iterator<Item = &MonthDay> {
        self.fixed_holidays.iter()
    }

    pub fn custom_holidays(&self) -> impl Iterator<Item = &NaiveDate> {
        self.custom_holidays.iter()
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend_days.contains(&date.weekday().num_days_from_monday())
    }

    pub fn is_fixed_holiday(&self, date: NaiveDate) -> bool {
        self.fixed_holidays.contains(&MonthDay::of(date))
    }

    pub fn is_custom_holiday(&self, date: NaiveDate) -> bool {
        self.custom_holidays.contains(&date)
    }

    /// Adds year-specific holidays. Adding a date twice is harmless.
    pub fn add_custom_holidays(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        let before = self.custom_holidays.len();
        self.custom_holidays.extend(dates);
        tracing::debug!(
            added = self.custom_holidays.len() - before,
            total = self.custom_holidays.len(),
            "custom holidays added"
        );
    }

    pub fn classify(&self, date: NaiveDate) -> DayKind {
        if self.is_weekend(date) {
            DayKind::Weekend
        } else if self.is_fixed_holiday(date) {
            DayKind::FixedHoliday
        } else if self.is_custom_holiday(date) {
            DayKind::CustomHoliday
        } else {
            DayKind::Working
        }
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.classify(date).is_working()
    }

    /// Counts working days in the inclusive range between `start` and `end`.
    /// The arguments may be given in either order.
    pub fn calculate_working_days(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let (start, end) = ordered(start, end);
        let count = start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_working_day(*d))
            .count() as u32;
        tracing::debug!(%start, %end, count, "counted working days");
        count
    }

    /// Text entry point: both values are parsed with `format` before counting.
    /// Nothing is counted unless both parse.
    pub fn calculate_working_days_str(
        &self,
        start: &str,
        end: &str,
        format: &str,
    ) -> Result<u32, CalendarError> {
        let start = parse_date(start, format)?;
        let end = parse_date(end, format)?;
        Ok(self.calculate_working_days(start, end))
    }

    /// Classification of every day in the inclusive range, earliest first.
    pub fn day_breakdown(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, DayKind)> {
        let (start, end) = ordered(start, end);
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|d| (d, self.classify(d)))
            .collect()
    }
}

fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a > b { (b, a) } else { (a, b) }
}
