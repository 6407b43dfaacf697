use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekError {
    #[error("{input:?} is not a valid day name, expected one of: {}", .valid.join(", "))]
    InvalidDay {
        input: String,
        valid: &'static [&'static str],
    },

    #[error("{input:?} is not a valid date, expected a date-like value such as YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("week containing {date} falls outside the supported date range")]
    OutOfRange { date: NaiveDate },
}
