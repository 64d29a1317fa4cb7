use crate::calc::error::CalendarError;
use chrono::NaiveDate;
use chrono::format::ParseErrorKind;

/// `YYYY-MM-DD`, the format text inputs are expected in unless told otherwise.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats tried after the primary one when adapting free-form row values.
/// Time-of-day parts are parsed and dropped. Slash dates are month first.
pub const FALLBACK_DATE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%m/%d/%Y"];

/// Parses `value` with a single chrono format string.
///
/// Values whose fields are recognised but do not name a real day (month 13,
/// February 30) are reported as `InvalidDate`; everything else that fails is a
/// `Parse` error carrying the expected format.
pub fn parse_date(value: &str, format: &str) -> Result<NaiveDate, CalendarError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, format).map_err(|e| match e.kind() {
        ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => CalendarError::InvalidDate {
            value: trimmed.to_string(),
        },
        _ => CalendarError::Parse {
            value: trimmed.to_string(),
            format: format.to_string(),
        },
    })
}

/// Converts source-specific date text into dates by trying a list of formats
/// in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAdapter {
    formats: Vec<String>,
}

impl Default for DateAdapter {
    fn default() -> Self {
        DateAdapter::new(DEFAULT_DATE_FORMAT)
    }
}

impl DateAdapter {
    /// Adapter that tries `primary` first, then the built-in fallbacks.
    /// A fallback that reads day and month the other way round from `primary`
    /// is left out.
    pub fn new(primary: &str) -> Self {
        let swapped = swap_day_month(primary);
        let mut formats = vec![primary.to_string()];
        for f in FALLBACK_DATE_FORMATS {
            if f != primary && f != swapped {
                formats.push(f.to_string());
            }
        }
        DateAdapter { formats }
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Returns the first successful parse.
    ///
    /// Fallbacks are only tried while the value has the wrong shape. Once a
    /// format recognises the fields but they name no real day, that
    /// `InvalidDate` is returned as is. When no format matches, the error of
    /// the primary format is returned so the message names the format the
    /// caller configured.
    pub fn parse(&self, value: &str) -> Result<NaiveDate, CalendarError> {
        let Some((primary, fallbacks)) = self.formats.split_first() else {
            return Err(CalendarError::Parse {
                value: value.trim().to_string(),
                format: String::new(),
            });
        };
        let primary_err = match parse_date(value, primary) {
            Ok(date) => return Ok(date),
            Err(e @ CalendarError::InvalidDate { .. }) => return Err(e),
            Err(e) => e,
        };
        for format in fallbacks {
            match parse_date(value, format) {
                Ok(date) => return Ok(date),
                Err(e @ CalendarError::InvalidDate { .. }) => return Err(e),
                Err(CalendarError::Parse { .. }) => {}
            }
        }
        Err(primary_err)
    }
}

fn swap_day_month(format: &str) -> String {
    format
        .replace("%d", "\0")
        .replace("%m", "%d")
        .replace('\0', "%m")
}
