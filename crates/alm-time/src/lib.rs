//! # alm-time
//!
//! Dates, weekdays, business-day conventions, calendars and schedules.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `Calendar` trait: predicates, adjustment, shifting and counting.
pub mod calendar;

/// Named calendars (country / exchange specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Period` — a time span in a `TimeUnit`.
pub mod period;

/// Calendar profiles and the compiled `BusinessCalendar`.
pub mod profile;

/// `Schedule` — an ordered sequence of dates.
pub mod schedule;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` and `WeekdaySet`.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::Calendar;
pub use calendars::NamedCalendar;
pub use date::Date;
pub use period::{CompoundPeriod, Period};
pub use profile::{BaseProfile, BusinessCalendar, CalendarProfile, HolidayAdjustment};
pub use schedule::{DateGeneration, Schedule, ScheduleBuilder};
pub use time_unit::TimeUnit;
pub use weekday::{Weekday, WeekdaySet};
