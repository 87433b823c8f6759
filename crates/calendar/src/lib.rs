//! # dekadal-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"CalendarDate::new()"| B["CalendarDate"]
//!     B -->|"day_of_year()"| C["DOY (1..=366)"]
//!     C -->|"CalendarDate::from_year_doy()"| B
//!     B -->|".next_day()"| B
//!     B -->|"date_sequence()"| D["Vec of CalendarDate"]
//!     B -->|"calendar_fields()"| E["CalendarFields"]
//!     B -->|"julian_day() / days_since()"| F["f64 day counts"]
//!     F -->|"date_from_days()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use dekadal_calendar::{CalendarDate, day_of_year, days_in_month, is_leap_year, julian_day};
//!
//! assert!(is_leap_year(2000));
//! assert_eq!(days_in_month(1999, 2).unwrap(), 28);
//!
//! let date: CalendarDate = "2000-03-01".parse().unwrap();
//! assert_eq!(day_of_year(date), 61);
//!
//! let epoch = CalendarDate::new(1970, 1, 1).unwrap();
//! assert_eq!(julian_day(epoch), 2_440_587.5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap years and month lengths |
//! | `date` | Validated date with millisecond time-of-day |
//! | `doy` | Day-of-year numbering conventions |
//! | `sequence` | Daily date sequence generation |
//! | `fields` | Calendar field decomposition |
//! | `convert` | Epoch, Julian-date and day-count conversions |
//! | `error` | Error types |

mod convert;
mod date;
mod doy;
mod error;
mod fields;
mod gregorian;
mod sequence;

pub use convert::{
    DEFAULT_REFERENCE, UNIX_EPOCH_JD, date_from_days, days_since, epoch_millis, from_epoch_millis,
    julian_day,
};
pub use date::CalendarDate;
pub use doy::{DoyConvention, day_of_year, day_of_year_with, month_day_from_doy};
pub use error::CalendarError;
pub use fields::{CalendarFields, calendar_fields};
pub use gregorian::{days_in_month, days_in_year, is_leap_year};
pub use sequence::date_sequence;
