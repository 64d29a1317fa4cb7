use thiserror::Error;

/// Errors raised while turning user input into calendar dates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The value does not match the expected date format.
    #[error("could not parse '{value}' as a date (expected format {format})")]
    Parse { value: String, format: String },

    /// The value has the right shape but names a day that does not exist.
    #[error("'{value}' is not a valid calendar date")]
    InvalidDate { value: String },
}

impl CalendarError {
    /// The offending input.
    pub fn value(&self) -> &str {
        match self {
            CalendarError::Parse { value, .. } | CalendarError::InvalidDate { value } => value,
        }
    }
}
