//! `Calendar` trait.
//!
//! A calendar knows which dates are weekends and holidays, and from that
//! derives every business-day operation: adjustment under a
//! [`BusinessDayConvention`], advancing by calendar units, compound shifts
//! with business-day stepping, counting, and holiday enumeration.
//!
//! All operations are pure. Implementors hold no interior mutability, so a
//! calendar can be shared across threads and evaluated concurrently.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::period::CompoundPeriod;
use crate::time_unit::TimeUnit;
use crate::weekday::WeekdaySet;
use alm_core::{ensure, fail};
use alm_core::errors::Result;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"US (NYSE)"`).
    fn name(&self) -> &str;

    /// The weekdays that are never business days.
    fn weekend(&self) -> WeekdaySet;

    /// Return `true` if `date` is a holiday.
    ///
    /// Independent of the weekend: a holiday falling on a Saturday is still a
    /// holiday.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a weekend day.
    fn is_weekend(&self, date: Date) -> bool {
        self.weekend().contains(date.weekday())
    }

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return `true` if `date` is the last calendar day of its month.
    ///
    /// A calendar fact, independent of business days.
    fn is_end_of_month(&self, date: Date) -> bool {
        date.is_end_of_month()
    }

    /// Return `true` if `date` is the last business day of its month.
    fn is_last_business_day_of_month(&self, date: Date) -> Result<bool> {
        Ok(self.is_business_day(date) && self.end_of_month(date)? == date)
    }

    /// Return the last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Result<Date> {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Adjust `date` according to the given business-day convention.
    ///
    /// # Errors
    /// Returns `Error::Date` if no business day is found before the end of
    /// the representable date range.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        use BusinessDayConvention::*;
        match convention {
            Unadjusted => Ok(date),
            Following => roll(self, date, 1),
            Preceding => roll(self, date, -1),
            ModifiedFollowing | HalfMonthModifiedFollowing => {
                let adjusted = roll(self, date, 1)?;
                let crosses_month = !adjusted.same_month(date);
                let crosses_half = convention == HalfMonthModifiedFollowing
                    && date.day_of_month() <= 15
                    && adjusted.day_of_month() > 15;
                if crosses_month || crosses_half {
                    roll(self, date, -1)
                } else {
                    Ok(adjusted)
                }
            }
            ModifiedPreceding => {
                let adjusted = roll(self, date, -1)?;
                if adjusted.same_month(date) {
                    Ok(adjusted)
                } else {
                    roll(self, date, 1)
                }
            }
            Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                // a side that leaves the date range offers no candidate
                for k in 1i32.. {
                    let fwd = date.add_days(k).ok();
                    let bwd = date.add_days(-k).ok();
                    match (fwd, bwd) {
                        (Some(d), _) if self.is_business_day(d) => return Ok(d),
                        (_, Some(d)) if self.is_business_day(d) => return Ok(d),
                        (None, None) => break,
                        _ => {}
                    }
                }
                fail!(Date, "no business day near {date} within the date range")
            }
        }
    }

    /// Advance `date` by `n` calendar units, then adjust.
    ///
    /// Days and weeks move by exact calendar days. Months and years keep the
    /// day of month (clamped); when `end_of_month` is set and `date` is a
    /// month end, the result is the last business day of the landed month
    /// instead of the convention-adjusted date.
    fn advance(
        &self,
        date: Date,
        n: i32,
        unit: TimeUnit,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Date> {
        let landed = date.advance(n, unit)?;
        match unit {
            TimeUnit::Month | TimeUnit::Year if end_of_month && date.is_end_of_month() => {
                self.end_of_month(landed)
            }
            _ => self.adjust(landed, convention),
        }
    }

    /// Shift `date` by whole years and months, then by business days.
    ///
    /// With `period.days == 0` the calendar-shifted date is adjusted with
    /// `convention` (or forced to the last business day of its month, see
    /// [`Calendar::advance`]). Otherwise the date steps one calendar day at a
    /// time in the direction of `period.days`; weekend days and holidays are
    /// passed over without being counted, and no convention is applied.
    fn shift(
        &self,
        date: Date,
        period: CompoundPeriod,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Date> {
        let landed = date
            .advance(period.years, TimeUnit::Year)?
            .advance(period.months, TimeUnit::Month)?;

        if period.days == 0 {
            return if end_of_month && date.is_end_of_month() {
                self.end_of_month(landed)
            } else {
                self.adjust(landed, convention)
            };
        }

        step_business_days(self, landed, period.days)
    }

    /// Advance `date` by `n` business days (negative `n` moves backwards).
    ///
    /// Equivalent to a [`Calendar::shift`] with only a day component.
    fn advance_business_days(&self, date: Date, n: i32) -> Result<Date> {
        step_business_days(self, date, n)
    }

    /// Count the business days in `[start, stop]`.
    ///
    /// `include_start` / `include_end` control whether the endpoints
    /// themselves may be counted. When `start == stop` the single date counts
    /// only if both flags are set.
    ///
    /// # Errors
    /// `Error::InvalidRange` if `start > stop`.
    fn business_days_between(
        &self,
        start: Date,
        stop: Date,
        include_start: bool,
        include_end: bool,
    ) -> Result<i32> {
        ensure!(start <= stop, InvalidRange, "start {start} is after stop {stop}");
        let count = start
            .through(stop)
            .filter(|&d| (include_start || d != start) && (include_end || d != stop))
            .filter(|&d| self.is_business_day(d))
            .count();
        Ok(count as i32)
    }

    /// List the holidays in `[start, stop]` in ascending order.
    ///
    /// Without `include_weekends`, holidays falling on a weekend day are
    /// left out; with it, every non-business day is listed.
    ///
    /// # Errors
    /// `Error::InvalidRange` if `start > stop`.
    fn holidays_between(&self, start: Date, stop: Date, include_weekends: bool) -> Result<Vec<Date>> {
        ensure!(start <= stop, InvalidRange, "start {start} is after stop {stop}");
        Ok(start
            .through(stop)
            .filter(|&d| {
                if include_weekends {
                    !self.is_business_day(d)
                } else {
                    self.is_holiday(d) && !self.is_weekend(d)
                }
            })
            .collect())
    }
}

/// Step from `date` by `step` days until a business day is reached.
fn roll<C: Calendar + ?Sized>(cal: &C, mut date: Date, step: i32) -> Result<Date> {
    while !cal.is_business_day(date) {
        date = date.add_days(step)?;
    }
    Ok(date)
}

/// Move `n` business days away from `date`, never counting closed days.
fn step_business_days<C: Calendar + ?Sized>(cal: &C, mut date: Date, n: i32) -> Result<Date> {
    let step = n.signum();
    for _ in 0..n.unsigned_abs() {
        date = date.add_days(step)?;
        while !cal.is_business_day(date) {
            date = date.add_days(step)?;
        }
    }
    Ok(date)
}
