//! Declarative holiday rules.
//!
//! A named calendar is a static list of [`Observance`]s. Each observance
//! pairs a [`HolidayRule`] with the years in which it applies, so the whole
//! canonical holiday set of a market is data rather than code.

use crate::date::{days_in_month, Date};
use crate::weekday::Weekday;

/// How a holiday falls in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// The same month and day every year.
    Fixed {
        /// Month (1–12).
        month: u8,
        /// Day of month.
        day: u8,
    },
    /// A given weekday falling within a window of days of a month.
    ///
    /// Covers "n-th weekday" (`first = 7n - 6`, `last = 7n`), "last weekday"
    /// (the final seven days) and weekend substitutes such as "Monday 2nd or
    /// 3rd of January".
    WeekdayInWindow {
        /// The weekday.
        weekday: Weekday,
        /// Month (1–12).
        month: u8,
        /// First day of the window.
        first: u8,
        /// Last day of the window (inclusive).
        last: u8,
    },
    /// A fixed offset in days from Easter Monday (Good Friday is `-3`).
    Easter {
        /// Offset in days from Easter Monday.
        offset: i16,
    },
}

impl HolidayRule {
    /// The `n`-th `weekday` of `month`.
    pub const fn nth_weekday(n: u8, weekday: Weekday, month: u8) -> Self {
        HolidayRule::WeekdayInWindow {
            weekday,
            month,
            first: 7 * n - 6,
            last: 7 * n,
        }
    }

    /// The last `weekday` of `month`.
    pub const fn last_weekday(weekday: Weekday, month: u8) -> Self {
        // days_in_month is only year-dependent for February
        let last = days_in_month(2001, month);
        HolidayRule::WeekdayInWindow {
            weekday,
            month,
            first: last - 6,
            last,
        }
    }

    /// `weekday` on exactly `day` of `month`, i.e. a substitute day.
    pub const fn on_weekday(weekday: Weekday, month: u8, day: u8) -> Self {
        HolidayRule::WeekdayInWindow {
            weekday,
            month,
            first: day,
            last: day,
        }
    }

    fn matches(&self, parts: &DateParts) -> bool {
        match *self {
            HolidayRule::Fixed { month, day } => parts.month == month && parts.day == day,
            HolidayRule::WeekdayInWindow {
                weekday,
                month,
                first,
                last,
            } => {
                parts.weekday == weekday
                    && parts.month == month
                    && (first..=last).contains(&parts.day)
            }
            HolidayRule::Easter { offset } => {
                parts.day_of_year as i32 == easter_monday(parts.year) as i32 + offset as i32
            }
        }
    }
}

/// A named holiday rule restricted to a span of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observance {
    /// Holiday name, for diagnostics.
    pub name: &'static str,
    /// When the holiday falls.
    pub rule: HolidayRule,
    /// First year observed.
    pub from: u16,
    /// Last year observed.
    pub until: u16,
    /// Years inside `[from, until]` in which the holiday is not observed.
    pub except: &'static [u16],
}

impl Observance {
    /// A holiday observed in every year.
    pub const fn always(name: &'static str, rule: HolidayRule) -> Self {
        Self {
            name,
            rule,
            from: 1900,
            until: 2199,
            except: &[],
        }
    }

    /// A one-off closure on a specific date.
    pub const fn once(name: &'static str, year: u16, month: u8, day: u8) -> Self {
        Self {
            name,
            rule: HolidayRule::Fixed { month, day },
            from: year,
            until: year,
            except: &[],
        }
    }

    /// Restrict to years from `year` onwards.
    pub const fn since(self, year: u16) -> Self {
        Self { from: year, ..self }
    }

    /// Restrict to years up to and including `year`.
    pub const fn until(self, year: u16) -> Self {
        Self { until: year, ..self }
    }

    /// Skip the given years.
    pub const fn except(self, years: &'static [u16]) -> Self {
        Self {
            except: years,
            ..self
        }
    }

    fn applies(&self, parts: &DateParts) -> bool {
        (self.from..=self.until).contains(&parts.year)
            && !self.except.contains(&parts.year)
            && self.rule.matches(parts)
    }
}

/// Find the observance, if any, that makes `date` a holiday.
pub fn matching_observance(observances: &'static [Observance], date: Date) -> Option<&'static Observance> {
    let parts = DateParts::of(date);
    observances.iter().find(|o| o.applies(&parts))
}

/// Date fields decomposed once per lookup.
struct DateParts {
    year: u16,
    month: u8,
    day: u8,
    day_of_year: u16,
    weekday: Weekday,
}

impl DateParts {
    fn of(date: Date) -> Self {
        let (year, month, day) = date.ymd();
        Self {
            year,
            month,
            day,
            day_of_year: date.day_of_year(),
            weekday: date.weekday(),
        }
    }
}

/// Day of the year (1-based) of Easter Monday in `year`.
pub fn easter_monday(year: u16) -> u16 {
    let y = year as i32;
    // Oudin's algorithm for Easter Sunday
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let e_day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let e_month = 3 + (p + 26) / 30;
    let mut doy = e_day as u16;
    for mon in 1..e_month {
        doy += days_in_month(year, mon as u8) as u16;
    }
    doy + 1
}
