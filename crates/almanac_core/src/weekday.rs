//! Days of the week
//!
//! `Weekday` is the tag type the grid layer rotates to honor a week-start
//! convention. The canonical order is Monday-first; parsing from the
//! three-letter tags used by host configuration fails with
//! [`InvalidField`] for anything outside the seven known tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidField;

/// Day of the week, canonical order Monday through Sunday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// The canonical week order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Position within the canonical order (`Mon` is 0, `Sun` is 6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = InvalidField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mon" => Ok(Weekday::Mon),
            "tue" => Ok(Weekday::Tue),
            "wed" => Ok(Weekday::Wed),
            "thu" => Ok(Weekday::Thu),
            "fri" => Ok(Weekday::Fri),
            "sat" => Ok(Weekday::Sat),
            "sun" => Ok(Weekday::Sun),
            _ => Err(InvalidField::new(
                "weekday",
                s,
                "expected one of mon, tue, wed, thu, fri, sat, sun",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_starts_monday() {
        assert_eq!(Weekday::ALL[0], Weekday::Mon);
        assert_eq!(Weekday::ALL[6], Weekday::Sun);
        assert_eq!(Weekday::Thu.index(), 3);
    }

    #[test]
    fn parses_known_tags() {
        assert_eq!("wed".parse::<Weekday>().unwrap(), Weekday::Wed);
        assert_eq!("sun".parse::<Weekday>().unwrap(), Weekday::Sun);
        assert_eq!(Weekday::Sat.to_string(), "sat");
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = "wednesday".parse::<Weekday>().unwrap_err();
        assert_eq!(err.field, "weekday");
        assert_eq!(err.value, "wednesday");
        assert!("".parse::<Weekday>().is_err());
        assert!("Mon".parse::<Weekday>().is_err());
    }
}
