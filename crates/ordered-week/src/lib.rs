//! The seven dates of the week containing a given day, for any choice of
//! which weekday starts the week.
//!
//! ```
//! use ordered_week::{WeekConfig, WeekdayName};
//!
//! let config = WeekConfig::new();
//! let week = config.week("2024-06-13").unwrap();
//! assert_eq!(week.start_date().to_string(), "2024-06-10");
//! assert_eq!(week.sunday().to_string(), "2024-06-16");
//!
//! let mut sundays = config.derive();
//! sundays.set_start_day("sunday").unwrap();
//! assert_eq!(sundays.week("2024-06-13").unwrap().start_day(), WeekdayName::Sunday);
//! assert_eq!(config.start_day(), WeekdayName::Monday);
//! ```

pub mod config;
pub mod error;
pub mod week;
pub mod week_date;
pub mod weekday_name;

pub use config::{DEFAULT_START_DAY, WeekConfig};
pub use error::WeekError;
pub use week::Week;
pub use week_date::WeekDate;
pub use weekday_name::WeekdayName;
