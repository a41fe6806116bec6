//! Vectorised calendar operations.
//!
//! Every function compiles the calendar described by a [`CalendarSpec`],
//! runs one operation and discards the calendar. Per-element operations take
//! `Option<Date>` slices: a missing input yields a missing output, never an
//! error. Identifiers (conventions, units) are parsed up front, so an unknown
//! identifier fails the whole call before any element is evaluated.

use crate::config::CalendarSpec;
use crate::core::errors::{Error, Result};
use crate::core::fail;
use crate::time::{
    BusinessDayConvention, Calendar, CompoundPeriod, Date, Period, ScheduleBuilder, TimeUnit,
};

/// Apply `f` to every present element, propagating missing ones.
pub fn map_missing<T, F>(dates: &[Option<Date>], mut f: F) -> Result<Vec<Option<T>>>
where
    F: FnMut(Date) -> Result<T>,
{
    dates.iter().map(|d| d.map(&mut f).transpose()).collect()
}

/// Pair up two slices, recycling a length-one side.
fn recycle<'a, A: Copy, B: Copy>(a: &'a [A], b: &'a [B]) -> Result<impl Iterator<Item = (A, B)> + 'a> {
    let len = match (a.len(), b.len()) {
        (x, y) if x == y => x,
        (1, y) => y,
        (x, 1) => x,
        (x, y) => fail!(InvalidArgument, "cannot recycle inputs of lengths {x} and {y}"),
    };
    let pick_a = move |i: usize| a[if a.len() == 1 { 0 } else { i }];
    let pick_b = move |i: usize| b[if b.len() == 1 { 0 } else { i }];
    Ok((0..len).map(move |i| (pick_a(i), pick_b(i))))
}

/// Adjust each date to a business day.
pub fn adjust(dates: &[Option<Date>], convention: &str, spec: &CalendarSpec) -> Result<Vec<Option<Date>>> {
    let convention: BusinessDayConvention = convention.parse()?;
    let cal = spec.compile()?;
    tracing::trace!(op = "adjust", len = dates.len(), %convention);
    map_missing(dates, |d| cal.adjust(d, convention))
}

/// Advance each date by `n` units, then adjust.
pub fn advance(
    dates: &[Option<Date>],
    n: i32,
    unit: &str,
    convention: &str,
    end_of_month: bool,
    spec: &CalendarSpec,
) -> Result<Vec<Option<Date>>> {
    let unit: TimeUnit = unit.parse()?;
    let convention: BusinessDayConvention = convention.parse()?;
    let cal = spec.compile()?;
    tracing::trace!(op = "advance", len = dates.len(), n, %unit, %convention);
    map_missing(dates, |d| cal.advance(d, n, unit, convention, end_of_month))
}

/// Shift each date by years and months, then by business days.
pub fn shift(
    dates: &[Option<Date>],
    period: CompoundPeriod,
    convention: &str,
    end_of_month: bool,
    spec: &CalendarSpec,
) -> Result<Vec<Option<Date>>> {
    let convention: BusinessDayConvention = convention.parse()?;
    let cal = spec.compile()?;
    tracing::trace!(op = "shift", len = dates.len(), ?period, %convention);
    map_missing(dates, |d| cal.shift(d, period, convention, end_of_month))
}

/// Whether each date falls on a weekend.
pub fn is_weekend(dates: &[Option<Date>], spec: &CalendarSpec) -> Result<Vec<Option<bool>>> {
    let cal = spec.compile()?;
    tracing::trace!(op = "is_weekend", len = dates.len());
    map_missing(dates, |d| Ok(cal.is_weekend(d)))
}

/// Whether each date is a holiday.
pub fn is_holiday(dates: &[Option<Date>], spec: &CalendarSpec) -> Result<Vec<Option<bool>>> {
    let cal = spec.compile()?;
    tracing::trace!(op = "is_holiday", len = dates.len());
    map_missing(dates, |d| Ok(cal.is_holiday(d)))
}

/// Whether each date is a business day.
pub fn is_business_day(dates: &[Option<Date>], spec: &CalendarSpec) -> Result<Vec<Option<bool>>> {
    let cal = spec.compile()?;
    tracing::trace!(op = "is_business_day", len = dates.len());
    map_missing(dates, |d| Ok(cal.is_business_day(d)))
}

/// Whether each date is the last calendar day of its month.
pub fn is_end_of_month(dates: &[Option<Date>], spec: &CalendarSpec) -> Result<Vec<Option<bool>>> {
    let cal = spec.compile()?;
    tracing::trace!(op = "is_end_of_month", len = dates.len());
    map_missing(dates, |d| Ok(cal.is_end_of_month(d)))
}

/// Move each date to the last business day of its month.
pub fn adjust_end_of_month(dates: &[Option<Date>], spec: &CalendarSpec) -> Result<Vec<Option<Date>>> {
    let cal = spec.compile()?;
    tracing::trace!(op = "adjust_end_of_month", len = dates.len());
    map_missing(dates, |d| cal.end_of_month(d))
}

/// Count business days from each start (included) to each stop (excluded).
///
/// A pair with `start > stop` counts the same days from the other side and
/// is negative. A length-one side is recycled against the other.
///
/// # Errors
/// [`Error::InvalidArgument`] if the lengths cannot be recycled.
pub fn count_business_days_between(
    starts: &[Option<Date>],
    stops: &[Option<Date>],
    spec: &CalendarSpec,
) -> Result<Vec<Option<i32>>> {
    let cal = spec.compile()?;
    let pairs = recycle(starts, stops)?;
    tracing::trace!(op = "count_business_days_between", starts = starts.len(), stops = stops.len());
    pairs
        .map(|pair| match pair {
            (Some(start), Some(stop)) if start <= stop => {
                cal.business_days_between(start, stop, true, false).map(Some)
            }
            (Some(start), Some(stop)) => cal
                .business_days_between(stop, start, false, true)
                .map(|n| Some(-n)),
            _ => Ok(None),
        })
        .collect()
}

/// Holidays in `[start, stop]`, optionally including weekend days.
///
/// A missing endpoint yields an empty list.
///
/// # Errors
/// [`Error::InvalidRange`] if `start > stop`.
pub fn holidays_between(
    start: Option<Date>,
    stop: Option<Date>,
    include_weekends: bool,
    spec: &CalendarSpec,
) -> Result<Vec<Date>> {
    let cal = spec.compile()?;
    let (Some(start), Some(stop)) = (start, stop) else {
        return Ok(Vec::new());
    };
    tracing::trace!(op = "holidays_between", %start, %stop, include_weekends);
    cal.holidays_between(start, stop, include_weekends)
}

/// Options for [`seq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqOptions<'a> {
    /// Convention for the start date and, when start comes first, the
    /// interior dates.
    pub start_convention: &'a str,
    /// Convention for the stop date.
    pub stop_convention: &'a str,
    /// Keep month-end anchors at month ends.
    pub end_of_month: bool,
}

impl Default for SeqOptions<'_> {
    fn default() -> Self {
        Self {
            start_convention: "unadjusted",
            stop_convention: "unadjusted",
            end_of_month: false,
        }
    }
}

/// A regular sequence from `start` to `stop` stepping `by` units.
///
/// # Errors
/// [`Error::InvalidRange`] if either endpoint is missing,
/// [`Error::UnknownUnit`] / [`Error::UnknownConvention`] for bad
/// identifiers, [`Error::InvalidArgument`] if `by` is not positive.
pub fn seq(
    start: Option<Date>,
    stop: Option<Date>,
    by: i32,
    unit: &str,
    options: SeqOptions<'_>,
    spec: &CalendarSpec,
) -> Result<Vec<Date>> {
    let (Some(start), Some(stop)) = (start, stop) else {
        return Err(Error::InvalidRange(
            "`start` and `stop` must both be present".into(),
        ));
    };
    let tenor = Period::new(by, unit.parse()?);
    let start_convention: BusinessDayConvention = options.start_convention.parse()?;
    let stop_convention: BusinessDayConvention = options.stop_convention.parse()?;
    let cal = spec.compile()?;
    tracing::trace!(op = "seq", %start, %stop, %tenor);
    ScheduleBuilder::new(start, stop, tenor, &cal)
        .with_start_convention(start_convention)
        .with_stop_convention(stop_convention)
        .end_of_month(options.end_of_month)
        .build()
        .map(|s| s.into_dates())
}
