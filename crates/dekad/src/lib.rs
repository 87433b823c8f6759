//! # dekadal-dekad
//!
//! Calendar arithmetic for dekads: the three ten-day periods of every month
//! (days 1–10, 11–20 and 21–end of month) used by agro-meteorological and
//! remote-sensing time series.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarDate"] -->|"check_dekad()"| B["dekad end date"]
//!     A -->|"dekad_startdate_from_date()"| C["dekad start date"]
//!     A -->|"Dekad::from_date()"| D["Dekad"]
//!     D -->|".next() / Dekad::range()"| D
//!     D -->|".period()"| E["period 1..=36"]
//!     F["(year, running)"] -->|"running_dekad_to_date()"| B
//!     A -->|"dekad_index()"| G["DekadIndex"]
//!     H["&[CalendarDate]"] -->|"group_into_dekads()"| I["DekadGroups"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use dekadal_calendar::CalendarDate;
//! use dekadal_dekad::{
//!     FixedClock, GroupKey, check_dekad, dekad_index_until_now, dekad_to_day,
//!     group_into_dekads, running_dekad_to_date,
//! };
//!
//! let date = CalendarDate::new(2000, 2, 13).unwrap();
//! assert_eq!(check_dekad(date), CalendarDate::new(2000, 2, 20).unwrap());
//! assert_eq!(dekad_to_day(2000, 2, 3).unwrap(), 29);
//! assert_eq!(
//!     running_dekad_to_date(2014, 35).unwrap(),
//!     CalendarDate::new(2014, 12, 20).unwrap()
//! );
//!
//! // "now" comes from an explicit clock.
//! let clock = FixedClock(CalendarDate::new(2000, 3, 15).unwrap());
//! let index = dekad_index_until_now(CalendarDate::new(2000, 1, 5).unwrap(), &clock);
//! assert_eq!(index.len(), 8);
//!
//! let groups = group_into_dekads(&[date], GroupKey::StartDate);
//! assert!(groups.contains_key(&CalendarDate::new(2000, 2, 11).unwrap()));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `dekad` | `Dekad` value type and dekad iteration |
//! | `boundary` | Single-date dekad placement and boundary predicates |
//! | `clock` | Explicit sources of "now" |
//! | `index` | Dekad index enumeration |
//! | `period` | Period and running-dekad conversions |
//! | `group` | Grouping of dates by dekad |
//! | `batch` | Order-preserving batch variants |
//! | `error` | Error types |

mod batch;
mod boundary;
mod clock;
mod dekad;
mod error;
mod group;
mod index;
mod period;

pub use batch::{
    PAR_THRESHOLD, check_dekad_batch, dekad_startdate_batch, map_dates, map_dates_isolated,
    running_dekad_to_date_batch, try_map_dates,
};
pub use boundary::{
    check_dekad, check_dekad_enddate, check_dekad_startdate, day_to_dekad, dekad_startdate_from_date,
    dekad_to_day,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dekad::{Dekad, DekadRange};
pub use error::DekadError;
pub use group::{DekadGroups, GroupKey, group_into_dekads};
pub use index::{DekadIndex, dekad_index, dekad_index_until_now};
pub use period::{
    DEKADS_PER_YEAR, dekad_period, get_dekad_period, running_dekad, running_dekad_to_date,
};
