use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::error::WeekError;
use crate::week_date::WeekDate;
use crate::weekday_name::WeekdayName;

/// The seven consecutive dates of the week containing a reference date.
///
/// `days[0]` always falls on `start_day` and every following entry is one day
/// later than the previous, so the window is `start_date()..=end_date()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Week {
    start_day: WeekdayName,
    days: [NaiveDate; 7],
}

impl Week {
    /// Build the week containing `reference` that starts on `start_day`.
    pub fn new(reference: impl WeekDate, start_day: WeekdayName) -> Result<Self, WeekError> {
        let date = reference.to_week_date()?;
        let start = align_to_start(date, start_day)?;

        let mut days = [start; 7];
        for (offset, day) in days.iter_mut().enumerate().skip(1) {
            *day = start
                .checked_add_days(Days::new(offset as u64))
                .ok_or(WeekError::OutOfRange { date })?;
        }

        trace!(%date, %start_day, %start, "built week");
        Ok(Self { start_day, days })
    }

    /// Like [`Week::new`], but validates a textual start day first and
    /// propagates [`WeekError::InvalidDay`] instead of falling back to a default.
    pub fn try_new(
        reference: impl WeekDate,
        start_day: impl fmt::Display,
    ) -> Result<Self, WeekError> {
        let start_day = WeekdayName::validate(start_day)?;
        Self::new(reference, start_day)
    }

    pub fn start_day(&self) -> WeekdayName {
        self.start_day
    }

    pub fn start_date(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn end_date(&self) -> NaiveDate {
        self.days[6]
    }

    /// Inclusive range from the first to the last day of the week.
    pub fn to_range(&self) -> RangeInclusive<NaiveDate> {
        self.start_date()..=self.end_date()
    }

    pub fn days(&self) -> &[NaiveDate; 7] {
        &self.days
    }

    pub fn to_array(&self) -> [NaiveDate; 7] {
        self.days
    }

    /// Dates in ascending order. Each call starts over from the first day.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, NaiveDate>> {
        self.days.iter().copied()
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.days.contains(date)
    }

    /// The date in this week that falls on `day`, whichever day the week starts on.
    pub fn day(&self, day: WeekdayName) -> NaiveDate {
        self.days[self.offset_of(day)]
    }

    /// Every weekday mapped to its date, keyed Sunday through Saturday.
    pub fn to_ordered_map(&self) -> BTreeMap<WeekdayName, NaiveDate> {
        WeekdayName::ALL
            .into_iter()
            .map(|day| (day, self.day(day)))
            .collect()
    }

    fn offset_of(&self, day: WeekdayName) -> usize {
        (day.index() + 7 - self.start_day.index()) % 7
    }
}

/// Walk back from `date` to the nearest day that is a `start_day`, which is
/// `date` itself when it already matches. At most six steps.
fn align_to_start(date: NaiveDate, start_day: WeekdayName) -> Result<NaiveDate, WeekError> {
    let mut current = date;
    while !start_day.matches(&current) {
        current = current.pred_opt().ok_or(WeekError::OutOfRange { date })?;
    }
    Ok(current)
}

macro_rules! weekday_accessors {
    ($($method:ident => $day:ident),* $(,)?) => {
        impl Week {
            $(
                #[doc = concat!("The ", stringify!($day), " of this week.")]
                pub fn $method(&self) -> NaiveDate {
                    self.day(WeekdayName::$day)
                }
            )*
        }
    };
}

weekday_accessors! {
    sunday => Sunday,
    monday => Monday,
    tuesday => Tuesday,
    wednesday => Wednesday,
    thursday => Thursday,
    friday => Friday,
    saturday => Saturday,
}

impl IntoIterator for Week {
    type Item = NaiveDate;
    type IntoIter = std::array::IntoIter<NaiveDate, 7>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

impl<'a> IntoIterator for &'a Week {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

impl From<Week> for [NaiveDate; 7] {
    fn from(week: Week) -> Self {
        week.days
    }
}

/// `[2024-06-10, 2024-06-11, ..., 2024-06-16]`
impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", day.format("%Y-%m-%d"))?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
