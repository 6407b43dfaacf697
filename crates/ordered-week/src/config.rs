use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::WeekError;
use crate::week::Week;
use crate::week_date::WeekDate;
use crate::weekday_name::WeekdayName;

/// Start day used by a fresh root configuration.
pub const DEFAULT_START_DAY: WeekdayName = WeekdayName::Monday;

/// Week configuration scope: holds the default start day for the weeks it builds.
///
/// Scopes form a tree through [`WeekConfig::derive`]. A derived scope copies
/// its parent's start day at the moment of derivation and is independent from
/// then on: changing either one never affects the other.
///
/// Deserializes from e.g. `{ "start_day": "sunday" }`; a missing `start_day`
/// means [`DEFAULT_START_DAY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekConfig {
    #[serde(default = "default_start_day")]
    start_day: WeekdayName,
}

fn default_start_day() -> WeekdayName {
    DEFAULT_START_DAY
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            start_day: DEFAULT_START_DAY,
        }
    }
}

impl WeekConfig {
    /// Root scope starting weeks on [`DEFAULT_START_DAY`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Root scope starting weeks on `start_day`.
    pub fn with_start_day(start_day: impl fmt::Display) -> Result<Self, WeekError> {
        Ok(Self {
            start_day: WeekdayName::validate(start_day)?,
        })
    }

    pub fn start_day(&self) -> WeekdayName {
        self.start_day
    }

    /// Change this scope's default start day.
    ///
    /// An invalid name returns [`WeekError::InvalidDay`] and leaves the current
    /// value in place.
    pub fn set_start_day(&mut self, start_day: impl fmt::Display) -> Result<(), WeekError> {
        let start_day = WeekdayName::validate(start_day)?;
        debug!(from = %self.start_day, to = %start_day, "changing default start day");
        self.start_day = start_day;
        Ok(())
    }

    /// New child scope holding a snapshot of this scope's start day.
    pub fn derive(&self) -> Self {
        debug!(start_day = %self.start_day, "deriving week configuration");
        self.clone()
    }

    /// Week containing `reference`, starting on this scope's start day.
    pub fn week(&self, reference: impl WeekDate) -> Result<Week, WeekError> {
        Week::new(reference, self.start_day)
    }

    /// Week containing `reference`, starting on `start_day`.
    ///
    /// If `start_day` is not a valid day name it is ignored and this scope's
    /// start day is used, matching how an absent override behaves. Use
    /// [`Week::try_new`] to get the validation error instead.
    pub fn week_starting(
        &self,
        reference: impl WeekDate,
        start_day: impl fmt::Display,
    ) -> Result<Week, WeekError> {
        let start_day = match WeekdayName::validate(start_day) {
            Ok(day) => day,
            Err(e) => {
                warn!(fallback = %self.start_day, "ignoring start day override: {e}");
                self.start_day
            }
        };
        Week::new(reference, start_day)
    }

    /// Week containing today's local date.
    pub fn this_week(&self) -> Result<Week, WeekError> {
        self.week(Local::now().date_naive())
    }

    /// Week containing today's local date, starting on `start_day`, with the
    /// same fallback as [`WeekConfig::week_starting`].
    pub fn this_week_starting(&self, start_day: impl fmt::Display) -> Result<Week, WeekError> {
        self.week_starting(Local::now().date_naive(), start_day)
    }
}
