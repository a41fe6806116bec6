//! `TimeUnit` — units of calendar time used by `Period` and date arithmetic.

use std::str::FromStr;

use alm_core::errors::Error;

/// A unit of calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TimeUnit {
    /// Calendar days.
    Day,
    /// Calendar weeks (7 days).
    Week,
    /// Calendar months.
    Month,
    /// Calendar years (12 months).
    Year,
}

impl TimeUnit {
    /// The lowercase identifier (`"day"`, `"week"`, `"month"`, `"year"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "day" => Ok(TimeUnit::Day),
            "week" => Ok(TimeUnit::Week),
            "month" => Ok(TimeUnit::Month),
            "year" => Ok(TimeUnit::Year),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Day => write!(f, "Day(s)"),
            TimeUnit::Week => write!(f, "Week(s)"),
            TimeUnit::Month => write!(f, "Month(s)"),
            TimeUnit::Year => write!(f, "Year(s)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_identifiers() {
        for unit in [TimeUnit::Day, TimeUnit::Week, TimeUnit::Month, TimeUnit::Year] {
            assert_eq!(unit.as_str().parse::<TimeUnit>().unwrap(), unit);
        }
        assert_eq!(
            "Months".parse::<TimeUnit>(),
            Err(Error::UnknownUnit("Months".into()))
        );
    }
}
