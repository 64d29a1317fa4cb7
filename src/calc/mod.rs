pub mod batch;
pub mod dates;
pub mod error;
pub mod workday;

pub use batch::{BatchSummary, Record, parse_rows, process_rows, summarize};
pub use dates::{DEFAULT_DATE_FORMAT, DateAdapter, parse_date};
pub use error::CalendarError;
pub use workday::{DayKind, MonthDay, WorkingDayCalculator};
