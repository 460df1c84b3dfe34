//! The validated calendar date value type
//!
//! [`Date`] is constructed through fallible constructors that check every
//! field up front; once one exists it is self-consistent for its whole
//! life. Navigation (`advance_month`, `with_year`) returns a new value
//! that is already clamped to the target month's length, so there is no
//! separate "remember to re-validate" step for callers to forget.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::InvalidField;
use crate::weekday::Weekday;

/// Lowercase English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Name of a month given its 1-based number, `None` outside `1..=12`.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

/// Gregorian leap-year rule. The century check runs before the
/// four-year check: 1900 is common, 2000 is leap.
pub fn is_leap_year(year: i32) -> bool {
    if year % 400 == 0 {
        true
    } else if year % 100 == 0 {
        false
    } else {
        year % 4 == 0
    }
}

/// Number of days in a month, accounting for leap years.
///
/// Fails with [`InvalidField`] when `month` is outside `1..=12`; prefer
/// [`Date::length_of_month`] when a validated date is already in hand.
pub fn days_in_month(month: u8, year: i32) -> Result<u8, InvalidField> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        _ => Err(InvalidField::new("month", month, "must be in 1..=12")),
    }
}

/// Display-order tag for rendering a date. Has no effect on comparison
/// or equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// day/month/year
    #[default]
    Dmy,
    /// month/day/year
    Mdy,
    /// year/month/day
    Ymd,
}

impl DateFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            DateFormat::Dmy => "dmy",
            DateFormat::Mdy => "mdy",
            DateFormat::Ymd => "ymd",
        }
    }
}

impl FromStr for DateFormat {
    type Err = InvalidField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dmy" => Ok(DateFormat::Dmy),
            "mdy" => Ok(DateFormat::Mdy),
            "ymd" => Ok(DateFormat::Ymd),
            _ => Err(InvalidField::new(
                "format",
                s,
                "expected one of dmy, mdy, ymd",
            )),
        }
    }
}

/// Direction of a one-month navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonthStep {
    Forward,
    Backward,
}

/// A calendar day, optionally with a time of day.
///
/// Fields are private; all mutation goes through operations that keep the
/// value consistent. [`Date::compare`] orders by (year, month, day) and
/// breaks ties with hour and minute only when both sides carry the field:
/// a missing field on either side ends the comparison as equal at the
/// granularity both share. That rule is not transitive across mixed
/// granularities, so `==` and `<` are only defined between values that
/// carry the same set of time fields; `partial_cmp` returns `None` (and
/// `==` is `false`) for mixed-granularity pairs, and `compare` is the
/// surface that resolves those.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
    hour: Option<u8>,
    minute: Option<u8>,
    format: DateFormat,
}

/// Wire shape for serde; funnels deserialization through the validating
/// constructor so a deserialized `Date` upholds the same invariants.
#[derive(Serialize, Deserialize)]
struct RawDate {
    day: u8,
    month: u8,
    year: i32,
    #[serde(default)]
    hour: Option<u8>,
    #[serde(default)]
    minute: Option<u8>,
    #[serde(default)]
    format: DateFormat,
}

impl TryFrom<RawDate> for Date {
    type Error = InvalidField;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Date::from_parts(raw.day, raw.month, raw.year, raw.hour, raw.minute, raw.format)
    }
}

impl From<Date> for RawDate {
    fn from(date: Date) -> Self {
        RawDate {
            day: date.day,
            month: date.month,
            year: date.year,
            hour: date.hour,
            minute: date.minute,
            format: date.format,
        }
    }
}

impl Date {
    /// A date with no time of day, rendered day/month/year.
    pub fn new(day: u8, month: u8, year: i32) -> Result<Self, InvalidField> {
        Self::from_parts(day, month, year, None, None, DateFormat::Dmy)
    }

    /// Full constructor. All checks run before any field is committed:
    /// month range, day against the (month, year) pair, hour range, the
    /// minute-requires-hour invariant, minute range.
    pub fn from_parts(
        day: u8,
        month: u8,
        year: i32,
        hour: Option<u8>,
        minute: Option<u8>,
        format: DateFormat,
    ) -> Result<Self, InvalidField> {
        let month_len = days_in_month(month, year)?;
        if day < 1 || day > month_len {
            return Err(InvalidField::new(
                "day",
                day,
                format!("month {month} of year {year} has {month_len} days"),
            ));
        }
        if let Some(h) = hour {
            if h > 23 {
                return Err(InvalidField::new("hour", h, "must be in 0..=23"));
            }
        }
        if let Some(m) = minute {
            if hour.is_none() {
                return Err(InvalidField::new(
                    "minute",
                    m,
                    "cannot set a minute without an hour",
                ));
            }
            if m > 59 {
                return Err(InvalidField::new("minute", m, "must be in 0..=59"));
            }
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            format,
        })
    }

    /// The current local date, no time of day.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        // chrono only hands out valid civil dates, so fields can be
        // committed directly.
        Self {
            year: now.year(),
            month: now.month() as u8,
            day: now.day() as u8,
            hour: None,
            minute: None,
            format: DateFormat::default(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> Option<u8> {
        self.hour
    }

    pub fn minute(&self) -> Option<u8> {
        self.minute
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    /// Lowercase English name of this date's month.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month) - 1]
    }

    /// Number of days in this date's month.
    pub fn length_of_month(&self) -> u8 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
        }
    }

    /// Day of the week via Zeller's congruence over the proleptic
    /// Gregorian calendar.
    pub fn weekday(&self) -> Weekday {
        let (y, m) = if self.month < 3 {
            (self.year - 1, i32::from(self.month) + 12)
        } else {
            (self.year, i32::from(self.month))
        };
        let d = i32::from(self.day);
        // 0 = Saturday in Zeller's numbering
        let dow = (d + 13 * (m + 1) / 5 + y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400))
        .rem_euclid(7);
        Weekday::ALL[((dow + 5) % 7) as usize]
    }

    /// Same date with `day` reduced to the month's length when it would
    /// exceed it. Identity otherwise. This is the named normalization
    /// step the navigation operations apply internally.
    pub fn clamped_to_month(mut self) -> Self {
        let len = self.length_of_month();
        if self.day > len {
            tracing::trace!(day = self.day, len, "clamping day to month length");
            self.day = len;
        }
        self
    }

    /// One month forward or backward, rolling the year at the 12/1
    /// boundary and clamping the day to the target month's length.
    pub fn advance_month(mut self, step: MonthStep) -> Self {
        match step {
            MonthStep::Forward => {
                if self.month == 12 {
                    self.month = 1;
                    self.year += 1;
                } else {
                    self.month += 1;
                }
            }
            MonthStep::Backward => {
                if self.month == 1 {
                    self.month = 12;
                    self.year -= 1;
                } else {
                    self.month -= 1;
                }
            }
        }
        self.clamped_to_month()
    }

    /// Same date in another year, day clamped (Feb 29 becomes Feb 28
    /// when the target year is common).
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self.clamped_to_month()
    }

    /// Same month and year with a different day, validated against the
    /// month's length.
    pub fn with_day(self, day: u8) -> Result<Self, InvalidField> {
        let len = self.length_of_month();
        if day < 1 || day > len {
            return Err(InvalidField::new(
                "day",
                day,
                format!("month {} of year {} has {len} days", self.month, self.year),
            ));
        }
        Ok(Self { day, ..self })
    }

    /// Same date with a (validated) time of day attached.
    pub fn with_time(self, hour: u8, minute: Option<u8>) -> Result<Self, InvalidField> {
        if hour > 23 {
            return Err(InvalidField::new("hour", hour, "must be in 0..=23"));
        }
        if let Some(m) = minute {
            if m > 59 {
                return Err(InvalidField::new("minute", m, "must be in 0..=59"));
            }
        }
        Ok(Self {
            hour: Some(hour),
            minute,
            ..self
        })
    }

    /// Same date with a different display-order tag.
    pub fn with_format(self, format: DateFormat) -> Self {
        Self { format, ..self }
    }

    /// Day one of this date's month, time of day preserved.
    pub fn first_of_month(self) -> Self {
        Self { day: 1, ..self }
    }

    /// Total order on (year, month, day); hour then minute break ties
    /// only when both sides carry the field, otherwise the dates count
    /// as equal at the granularity both share.
    pub fn compare(&self, other: &Date) -> Ordering {
        let by_day = (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day));
        if by_day != Ordering::Equal {
            return by_day;
        }
        let (Some(lh), Some(rh)) = (self.hour, other.hour) else {
            return Ordering::Equal;
        };
        if lh != rh {
            return lh.cmp(&rh);
        }
        let (Some(lm), Some(rm)) = (self.minute, other.minute) else {
            return Ordering::Equal;
        };
        lm.cmp(&rm)
    }

    /// True when both values carry the same set of time fields.
    fn same_granularity(&self, other: &Date) -> bool {
        self.hour.is_some() == other.hour.is_some()
            && self.minute.is_some() == other.minute.is_some()
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.same_granularity(other) && self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Date {
    /// Defined only between values with the same time granularity;
    /// mixed-granularity pairs are incomparable. Use [`Date::compare`]
    /// to rank those at the granularity both sides share.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_granularity(other).then(|| self.compare(other))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            DateFormat::Dmy => write!(f, "{}/{}/{}", self.day, self.month, self.year)?,
            DateFormat::Mdy => write!(f, "{}/{}/{}", self.month, self.day, self.year)?,
            DateFormat::Ymd => write!(f, "{}/{}/{}", self.year, self.month, self.day)?,
        }
        match (self.hour, self.minute) {
            (Some(h), Some(m)) => write!(f, ", {h}:{m}"),
            (Some(h), None) => write!(f, ", {h}h"),
            _ => Ok(()),
        }
    }
}
