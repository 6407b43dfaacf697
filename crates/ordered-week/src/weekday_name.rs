use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::WeekError;

/// Name of a day of the week.
///
/// Variants are declared in canonical order starting with Sunday, so the
/// derived `Ord` sorts Sunday first and `index()` is 0 for Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WeekdayName {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekdayName {
    /// All weekdays in canonical order.
    pub const ALL: [WeekdayName; 7] = [
        WeekdayName::Sunday,
        WeekdayName::Monday,
        WeekdayName::Tuesday,
        WeekdayName::Wednesday,
        WeekdayName::Thursday,
        WeekdayName::Friday,
        WeekdayName::Saturday,
    ];

    /// Lowercase names, in the same order as [`WeekdayName::ALL`].
    pub const NAMES: [&'static str; 7] = [
        "sunday",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
    ];

    /// Validate anything that renders as text against the seven day names.
    ///
    /// Matching is case-insensitive. Surrounding whitespace is not stripped,
    /// so `" monday"` is rejected.
    pub fn validate(input: impl fmt::Display) -> Result<Self, WeekError> {
        let day = input.to_string().to_lowercase();
        Self::NAMES
            .iter()
            .position(|name| *name == day)
            .map(Self::from_index)
            .ok_or(WeekError::InvalidDay {
                input: day,
                valid: &Self::NAMES,
            })
    }

    /// Position in the canonical week, Sunday = 0 through Saturday = 6.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`WeekdayName::index`]. Wraps modulo 7.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Whether `date` falls on this weekday.
    pub fn matches(self, date: &impl chrono::Datelike) -> bool {
        Self::from(date.weekday()) == self
    }
}

impl From<Weekday> for WeekdayName {
    fn from(weekday: Weekday) -> Self {
        Self::from_index(weekday.num_days_from_sunday() as usize)
    }
}

impl From<WeekdayName> for Weekday {
    fn from(day: WeekdayName) -> Self {
        match day {
            WeekdayName::Sunday => Weekday::Sun,
            WeekdayName::Monday => Weekday::Mon,
            WeekdayName::Tuesday => Weekday::Tue,
            WeekdayName::Wednesday => Weekday::Wed,
            WeekdayName::Thursday => Weekday::Thu,
            WeekdayName::Friday => Weekday::Fri,
            WeekdayName::Saturday => Weekday::Sat,
        }
    }
}

impl FromStr for WeekdayName {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl TryFrom<String> for WeekdayName {
    type Error = WeekError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(s)
    }
}

impl fmt::Display for WeekdayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
