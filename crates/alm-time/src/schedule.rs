//! `Schedule` — a regular sequence of dates between two endpoints.
//!
//! A schedule is generated from a start date, a stop date and a tenor. Anchor
//! dates are produced by repeatedly stepping the tenor from one endpoint;
//! the endpoints and the anchors are then adjusted to business days.

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::Calendar;
use crate::date::Date;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use alm_core::ensure;
use alm_core::errors::Result;

/// Direction in which anchors are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateGeneration {
    /// Anchors stepped forward from the earlier endpoint.
    Forward,
    /// Anchors stepped backward from the later endpoint.
    Backward,
}

/// An ordered, duplicate-free sequence of dates.
///
/// The first date comes from the start endpoint and the last from the stop
/// endpoint, so the sequence is descending when start was after stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    dates: Vec<Date>,
    rule: DateGeneration,
}

impl Schedule {
    /// Return all dates in the schedule.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Consume the schedule, returning its dates.
    pub fn into_dates(self) -> Vec<Date> {
        self.dates
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return the `i`-th date.
    pub fn get(&self, i: usize) -> Option<Date> {
        self.dates.get(i).copied()
    }

    /// The adjusted start date.
    pub fn start_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// The adjusted stop date.
    pub fn end_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// The generation rule that was used.
    pub fn rule(&self) -> DateGeneration {
        self.rule
    }
}

/// Builder for [`Schedule`].
#[derive(Debug)]
pub struct ScheduleBuilder<'a> {
    start: Date,
    stop: Date,
    tenor: Period,
    calendar: &'a dyn Calendar,
    start_convention: BusinessDayConvention,
    stop_convention: BusinessDayConvention,
    end_of_month: bool,
}

impl<'a> ScheduleBuilder<'a> {
    /// Begin building a schedule.
    ///
    /// Both conventions default to `Unadjusted`.
    pub fn new(start: Date, stop: Date, tenor: Period, calendar: &'a dyn Calendar) -> Self {
        Self {
            start,
            stop,
            tenor,
            calendar,
            start_convention: BusinessDayConvention::Unadjusted,
            stop_convention: BusinessDayConvention::Unadjusted,
            end_of_month: false,
        }
    }

    /// Set the business-day convention for the start date.
    pub fn with_start_convention(mut self, c: BusinessDayConvention) -> Self {
        self.start_convention = c;
        self
    }

    /// Set the business-day convention for the stop date.
    pub fn with_stop_convention(mut self, c: BusinessDayConvention) -> Self {
        self.stop_convention = c;
        self
    }

    /// Whether anchors stepped from a month end stick to month ends.
    ///
    /// Only monthly and yearly tenors are affected.
    pub fn end_of_month(mut self, flag: bool) -> Self {
        self.end_of_month = flag;
        self
    }

    /// Build the `Schedule`.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the tenor length is not positive, and
    /// any adjustment error from the calendar.
    pub fn build(self) -> Result<Schedule> {
        ensure!(self.tenor.length > 0, InvalidArgument, "tenor must be positive, got {}", self.tenor);

        let rule = if self.start <= self.stop {
            DateGeneration::Forward
        } else {
            DateGeneration::Backward
        };

        if self.start == self.stop {
            let only = self.calendar.adjust(self.start, self.start_convention)?;
            return Ok(Schedule {
                dates: vec![only],
                rule,
            });
        }

        // chronological endpoints with their own conventions
        let (lo, lo_conv, hi, hi_conv) = match rule {
            DateGeneration::Forward => (self.start, self.start_convention, self.stop, self.stop_convention),
            DateGeneration::Backward => (self.stop, self.stop_convention, self.start, self.start_convention),
        };

        let anchors = self.anchors(rule, lo, hi);

        let mut dates = vec![self.calendar.adjust(lo, lo_conv)?];
        for anchor in &anchors {
            let adjusted = self.calendar.adjust(*anchor, lo_conv)?;
            if dates.last().map_or(true, |last| adjusted > *last) {
                dates.push(adjusted);
            }
        }

        // adjustments can pull interior dates onto or past the final one
        let last = self.calendar.adjust(hi, hi_conv)?;
        while dates.len() > 1 && dates.last().map_or(false, |d| *d >= last) {
            dates.pop();
        }
        if last > dates[0] {
            dates.push(last);
        } else if rule == DateGeneration::Backward {
            // collapsed: keep the start endpoint, which is `hi` here
            dates = vec![last];
        }

        if rule == DateGeneration::Backward {
            dates.reverse();
        }

        tracing::debug!(
            rule = ?rule,
            tenor = %self.tenor,
            anchors = anchors.len(),
            dates = dates.len(),
            "generated schedule"
        );

        Ok(Schedule { dates, rule })
    }

    /// Unadjusted anchors strictly between `lo` and `hi`, ascending.
    fn anchors(&self, rule: DateGeneration, lo: Date, hi: Date) -> Vec<Date> {
        let (seed, sign) = match rule {
            DateGeneration::Forward => (lo, 1),
            DateGeneration::Backward => (hi, -1),
        };
        let stick_to_month_end = self.end_of_month
            && matches!(self.tenor.unit, TimeUnit::Month | TimeUnit::Year)
            && seed.is_end_of_month();

        let mut anchors = Vec::new();
        for i in 1i32.. {
            let Some(n) = self.tenor.length.checked_mul(i) else {
                break;
            };
            // leaving the representable range means the endpoint was passed
            let Ok(mut anchor) = seed.advance(sign * n, self.tenor.unit) else {
                break;
            };
            if stick_to_month_end {
                anchor = anchor.end_of_month();
            }
            if anchor <= lo || anchor >= hi {
                break;
            }
            anchors.push(anchor);
        }
        if rule == DateGeneration::Backward {
            anchors.reverse();
        }
        anchors
    }
}
