//! `Period` — a time span expressed in a [`TimeUnit`], and `CompoundPeriod`
//! — a combined years/months/business-days shift.

use std::str::FromStr;

use crate::time_unit::TimeUnit;
use alm_core::errors::{Error, Result};

/// A time span made up of an integer length and a [`TimeUnit`].
///
/// The step size ("tenor") of a schedule.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }
}

impl FromStr for Period {
    type Err = Error;

    /// Parse strings like `"3M"`, `"1Y"`, `"30D"`, `"-2W"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let unit = match s.chars().last().map(|c| c.to_ascii_uppercase()) {
            Some('D') => TimeUnit::Day,
            Some('W') => TimeUnit::Week,
            Some('M') => TimeUnit::Month,
            Some('Y') => TimeUnit::Year,
            _ => return Err(Error::UnknownUnit(s.to_string())),
        };
        let length = s[..s.len() - 1]
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("cannot parse period '{s}'")))?;
        Ok(Period::new(length, unit))
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Day => "D",
            TimeUnit::Week => "W",
            TimeUnit::Month => "M",
            TimeUnit::Year => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

/// A shift of whole years and months followed by a number of business days,
/// e.g. "1 year and 3 business days".
///
/// Consumed by [`Calendar::shift`](crate::calendar::Calendar::shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompoundPeriod {
    /// Calendar years, applied first.
    pub years: i32,
    /// Calendar months, applied after the years.
    pub months: i32,
    /// Business days stepped after the calendar shift.
    pub days: i32,
}

impl CompoundPeriod {
    /// Create a new compound period.
    pub fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }
}
