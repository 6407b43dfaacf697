use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::WeekError;

/// A value that can be reduced to a plain calendar date.
///
/// Any time-of-day component is dropped. Timezone-aware values use the date
/// in their own offset; no conversion between zones takes place.
pub trait WeekDate {
    fn to_week_date(&self) -> Result<NaiveDate, WeekError>;
}

impl WeekDate for NaiveDate {
    fn to_week_date(&self) -> Result<NaiveDate, WeekError> {
        Ok(*self)
    }
}

impl WeekDate for NaiveDateTime {
    fn to_week_date(&self) -> Result<NaiveDate, WeekError> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> WeekDate for DateTime<Tz> {
    fn to_week_date(&self) -> Result<NaiveDate, WeekError> {
        Ok(self.date_naive())
    }
}

/// `(year, month, day)`.
impl WeekDate for (i32, u32, u32) {
    fn to_week_date(&self) -> Result<NaiveDate, WeekError> {
        let (y, m, d) = *self;
        NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| WeekError::InvalidDate {
            input: format!("{y:04}-{m:02}-{d:02}"),
        })
    }
}

/// Strict ISO `YYYY-MM-DD`. No other textual format is accepted.
impl WeekDate for str {
    fn to_week_date(&self) -> Result<NaiveDate, WeekError> {
        // chrono's parser also takes unpadded fields and short years, so only
        // accept input that formats back to itself.
        NaiveDate::parse_from_str(self, "%Y-%m-%d")
            .ok()
            .filter(|date| date.format("%Y-%m-%d").to_string() == self)
            .ok_or_else(|| WeekError::InvalidDate {
                input: self.to_string(),
            })
    }
}

impl WeekDate for String {
    fn to_week_date(&self) -> Result<NaiveDate, WeekError> {
        self.as_str().to_week_date()
    }
}

impl<T: WeekDate + ?Sized> WeekDate for &T {
    fn to_week_date(&self) -> Result<NaiveDate, WeekError> {
        (**self).to_week_date()
    }
}
