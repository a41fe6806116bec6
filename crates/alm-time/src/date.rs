//! `Date` type.
//!
//! Dates are stored as a serial number of days in the proleptic Gregorian
//! calendar.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.
//! * Every constructor and every arithmetic operation validates the range, so
//!   a `Date` value is always a real calendar day.

use std::str::FromStr;

use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use alm_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(serial_from_ymd(2199, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from the number of days since 1970-01-01.
    ///
    /// This is the encoding used by most external date columns.
    pub fn from_unix_days(days: i32) -> Result<Self> {
        days.checked_add(UNIX_EPOCH_SERIAL)
            .ok_or_else(|| Error::Date(format!("unix day {days} out of range")))
            .and_then(Self::from_serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the number of days since 1970-01-01 (negative before it).
    pub fn unix_days(&self) -> i32 {
        self.0 - UNIX_EPOCH_SERIAL
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in a single decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 (1900-01-01) is a Monday
        match (self.0 - 1).rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) if serial >= Self::MIN.0 && serial <= Self::MAX.0 => Ok(Date(serial)),
            _ => Err(Error::Date(format!(
                "date arithmetic: {self} {n:+} days is out of range"
            ))),
        }
    }

    /// Advance by `n` units of calendar time.
    ///
    /// Days and weeks are exact. Months and years keep the day of month,
    /// clamping to the last day of a shorter target month.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Day => self.add_days(n),
            TimeUnit::Week => self.add_days(checked_mul(n, 7)?),
            TimeUnit::Month => {
                let (y, m, d) = ymd_from_serial(self.0);
                let out_of_range =
                    || Error::Date(format!("date arithmetic: {self} {n:+} months leaves year range"));
                let total = (y as i32 * 12 + (m as i32 - 1))
                    .checked_add(n)
                    .ok_or_else(out_of_range)?;
                let new_y = total.div_euclid(12);
                let new_m = (total.rem_euclid(12) + 1) as u8;
                if !(1900..=2199).contains(&new_y) {
                    return Err(out_of_range());
                }
                let new_y = new_y as u16;
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Year => self.advance(checked_mul(n, 12)?, TimeUnit::Month),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if the following calendar day falls in the next month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return `true` if `self` and `other` share year and month.
    pub fn same_month(self, other: Date) -> bool {
        let (y1, m1, _) = ymd_from_serial(self.0);
        let (y2, m2, _) = ymd_from_serial(other.0);
        y1 == y2 && m1 == m2
    }

    /// Iterate over every date in `[self, last]`.
    ///
    /// Empty if `last < self`.
    pub fn through(self, last: Date) -> impl Iterator<Item = Date> {
        (self.0..=last.0).map(Date)
    }
}

fn checked_mul(n: i32, factor: i32) -> Result<i32> {
    n.checked_mul(factor)
        .ok_or_else(|| Error::Date(format!("period length {n} overflows")))
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing & display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let mut field = |what: &str| {
            parts
                .next()
                .and_then(|p| p.parse::<u16>().ok())
                .ok_or_else(|| Error::Date(format!("cannot parse {what} of date '{s}'")))
        };
        let year = field("year")?;
        let month = field("month")?;
        let day = field("day")?;
        if month > 12 || day > 31 {
            return Err(Error::Date(format!("invalid date '{s}'")));
        }
        Date::from_ymd(year, month as u8, day as u8)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, day as u32)
            .ok_or_else(|| Error::Date(format!("{d} is not representable")))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Serial of 1970-01-01.
const UNIX_EPOCH_SERIAL: i32 = serial_from_ymd(1970, 1, 1);

/// Convert (year, month, day) to a serial number. Serial 1 = 1900-01-01.
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let mut serial = (y - 1900) * 365;
    // leap days in [1900, year); 1900 itself is not a leap year
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1900, 1, 1).serial(), 1);
        assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(Date::MAX, date(2199, 12, 31));
    }

    #[test]
    fn test_unix_days() {
        assert_eq!(date(1970, 1, 1).unix_days(), 0);
        assert_eq!(date(1970, 1, 2).unix_days(), 1);
        assert_eq!(date(1969, 12, 31).unix_days(), -1);
        // 2016-04-30 is day 16921 of the unix epoch
        assert_eq!(Date::from_unix_days(16921).unwrap(), date(2016, 4, 30));
        assert!(Date::from_unix_days(i32::MAX).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29),
            (2100, 2, 28),
            (2023, 6, 15),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_construction() {
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_serial(0).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2016, 4, 30).weekday(), Weekday::Saturday);
        let week: Vec<_> = date(2024, 1, 1).through(date(2024, 1, 7)).map(|d| d.weekday()).collect();
        assert_eq!(week, Weekday::ALL);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2023, 1, 1).day_of_year(), 1);
        assert_eq!(date(2024, 3, 1).day_of_year(), 61);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
    }

    #[test]
    fn test_advance_months_clamps() {
        let d = date(2023, 1, 31);
        assert_eq!(d.advance(1, TimeUnit::Month).unwrap(), date(2023, 2, 28));
        assert_eq!(d.advance(-2, TimeUnit::Month).unwrap(), date(2022, 11, 30));
        assert_eq!(d.advance(13, TimeUnit::Month).unwrap(), date(2024, 2, 29));
        assert_eq!(
            date(2024, 2, 29).advance(1, TimeUnit::Year).unwrap(),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_advance_days_and_weeks() {
        let d = date(2023, 12, 30);
        assert_eq!(d.advance(3, TimeUnit::Day).unwrap(), date(2024, 1, 2));
        assert_eq!(d.advance(-2, TimeUnit::Week).unwrap(), date(2023, 12, 16));
    }

    #[test]
    fn test_advance_out_of_range() {
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(date(2199, 6, 1).advance(1, TimeUnit::Year).is_err());
    }

    #[test]
    fn test_advance_extreme_counts() {
        let d = date(2021, 1, 31);
        for unit in [TimeUnit::Day, TimeUnit::Week, TimeUnit::Month, TimeUnit::Year] {
            for n in [i32::MAX, i32::MIN] {
                assert!(
                    matches!(d.advance(n, unit), Err(Error::Date(_))),
                    "{n} {unit}"
                );
            }
        }
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(date(2024, 2, 15).end_of_month(), date(2024, 2, 29));
        assert!(date(2021, 4, 30).is_end_of_month());
        assert!(!date(2021, 4, 29).is_end_of_month());
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2016-04-30".parse().unwrap();
        assert_eq!(d, date(2016, 4, 30));
        assert_eq!(d.to_string(), "2016-04-30");
        assert_eq!(format!("{d:?}"), "Date(2016-04-30)");
        assert!("2016-02-30".parse::<Date>().is_err());
        assert!("bad".parse::<Date>().is_err());
        assert!("2016-04".parse::<Date>().is_err());
    }

    #[test]
    fn test_through() {
        let days: Vec<Date> = date(2023, 1, 30).through(date(2023, 2, 1)).collect();
        assert_eq!(days, vec![date(2023, 1, 30), date(2023, 1, 31), date(2023, 2, 1)]);
        assert_eq!(date(2023, 2, 1).through(date(2023, 1, 1)).count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_iso() {
        let d = date(2021, 1, 31);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2021-01-31\"");
        let back: Date = serde_json::from_str("\"2021-01-31\"").unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Date>("\"2021-02-31\"").is_err());
    }
}
