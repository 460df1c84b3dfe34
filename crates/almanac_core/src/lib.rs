//! Almanac Calendar Core
//!
//! This crate provides the date model underneath the almanac picker
//! widgets:
//!
//! - **Validated dates**: [`Date`] checks every field at construction and
//!   stays self-consistent afterwards
//! - **Calendar rules**: Gregorian leap years, month lengths, weekday
//!   computation
//! - **Navigation**: month stepping and year edits that clamp the day to
//!   the target month as part of their contract
//!
//! # Example
//!
//! ```rust
//! use almanac_core::{Date, MonthStep};
//!
//! let date = Date::new(31, 1, 2024)?;
//! assert_eq!(date.weekday().as_str(), "wed");
//!
//! // Stepping into February clamps the day to the leap-year length.
//! let next = date.advance_month(MonthStep::Forward);
//! assert_eq!((next.month(), next.day()), (2, 29));
//! # Ok::<(), almanac_core::InvalidField>(())
//! ```

pub mod date;
pub mod error;
pub mod weekday;

pub use date::{
    days_in_month, is_leap_year, month_name, Date, DateFormat, MonthStep, MONTH_NAMES,
};
pub use error::InvalidField;
pub use weekday::Weekday;
