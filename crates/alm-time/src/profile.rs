//! Calendar profiles.
//!
//! A [`CalendarProfile`] describes a calendar: a base (a named rule set or a
//! custom weekend-only calendar) plus explicitly added and removed holidays.
//! Compiling it yields a [`BusinessCalendar`], the read-only view every
//! operation runs against.

use std::collections::BTreeSet;

use crate::calendar::Calendar;
use crate::calendars::{self, NamedCalendar};
use crate::date::Date;
use crate::weekday::WeekdaySet;
use alm_core::ensure;
use alm_core::errors::Result;

/// Identities that select a custom (rule-free) base.
const CUSTOM_IDENTITIES: [&str; 2] = ["custom", "empty"];

/// Holidays added to and removed from a base calendar.
///
/// Removal is applied after addition: a date present in both sets is a
/// business day (unless it falls on a weekend).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayAdjustment {
    /// Extra holidays.
    pub added: BTreeSet<Date>,
    /// Dates that are never holidays, even if the base says so.
    pub removed: BTreeSet<Date>,
}

impl HolidayAdjustment {
    /// Return `true` if `date` is a holiday given the base's answer.
    pub fn apply(&self, date: Date, base_holiday: bool) -> bool {
        if self.removed.contains(&date) {
            return false;
        }
        base_holiday || self.added.contains(&date)
    }

    /// Return `true` if nothing is added or removed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// The base of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseProfile {
    /// A registered rule set with a Saturday/Sunday weekend.
    Named(&'static NamedCalendar),
    /// No canonical holidays and a caller-chosen weekend.
    Custom {
        /// Weekend days.
        weekend: WeekdaySet,
    },
}

impl BaseProfile {
    fn weekend(&self) -> WeekdaySet {
        match self {
            BaseProfile::Named(cal) => cal.weekend(),
            BaseProfile::Custom { weekend } => *weekend,
        }
    }

    fn is_holiday(&self, date: Date) -> bool {
        match self {
            BaseProfile::Named(cal) => cal.is_holiday(date),
            BaseProfile::Custom { .. } => false,
        }
    }

    fn identity(&self) -> &'static str {
        match self {
            BaseProfile::Named(cal) => cal.id(),
            BaseProfile::Custom { .. } => "custom",
        }
    }
}

/// Description of a calendar, built fresh for each request.
///
/// # Example
/// ```
/// use alm_time::{Calendar, CalendarProfile, Date};
///
/// let cal = CalendarProfile::from_identity("united_states", &[])
///     .unwrap()
///     .with_removed([Date::from_ymd(2023, 7, 4).unwrap()])
///     .compile()
///     .unwrap();
/// assert!(cal.is_business_day(Date::from_ymd(2023, 7, 4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarProfile {
    base: BaseProfile,
    adjustment: HolidayAdjustment,
}

impl CalendarProfile {
    /// Profile over a named rule set.
    pub fn named(calendar: &'static NamedCalendar) -> Self {
        Self {
            base: BaseProfile::Named(calendar),
            adjustment: HolidayAdjustment::default(),
        }
    }

    /// Profile with no canonical holidays and the given weekend.
    pub fn custom(weekend: WeekdaySet) -> Self {
        Self {
            base: BaseProfile::Custom { weekend },
            adjustment: HolidayAdjustment::default(),
        }
    }

    /// Resolve an identity string.
    ///
    /// `"custom"` and `"empty"` build a custom base whose weekend comes from
    /// `weekend_codes` (1 = Sunday … 7 = Saturday). Any other identity is
    /// looked up in the registry and `weekend_codes` is ignored.
    ///
    /// # Errors
    /// `Error::UnknownCalendar` or `Error::UnknownWeekday`.
    pub fn from_identity(identity: &str, weekend_codes: &[i32]) -> Result<Self> {
        if CUSTOM_IDENTITIES.contains(&identity) {
            return Ok(Self::custom(WeekdaySet::from_codes(weekend_codes)?));
        }
        calendars::lookup(identity).map(Self::named)
    }

    /// Add holidays.
    pub fn with_added(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.adjustment.added.extend(dates);
        self
    }

    /// Remove holidays.
    pub fn with_removed(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.adjustment.removed.extend(dates);
        self
    }

    /// The base of this profile.
    pub fn base(&self) -> &BaseProfile {
        &self.base
    }

    /// The holiday additions and removals.
    pub fn adjustment(&self) -> &HolidayAdjustment {
        &self.adjustment
    }

    /// Compile into a calendar.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the weekend covers the whole week, since
    /// no date could ever be adjusted onto a business day.
    pub fn compile(self) -> Result<BusinessCalendar> {
        let weekend = self.base.weekend();
        ensure!(!weekend.is_full(), InvalidArgument, "weekend cannot contain every day of the week");
        let name = match self.base {
            BaseProfile::Named(cal) => cal.name().to_string(),
            BaseProfile::Custom { .. } => "Custom".to_string(),
        };
        tracing::debug!(
            identity = self.base.identity(),
            weekend = ?weekend,
            added = self.adjustment.added.len(),
            removed = self.adjustment.removed.len(),
            "compiled calendar"
        );
        Ok(BusinessCalendar {
            name,
            weekend,
            profile: self,
        })
    }
}

/// A compiled, read-only calendar.
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    name: String,
    weekend: WeekdaySet,
    profile: CalendarProfile,
}

impl BusinessCalendar {
    /// The profile this calendar was compiled from.
    pub fn profile(&self) -> &CalendarProfile {
        &self.profile
    }
}

impl Calendar for BusinessCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn weekend(&self) -> WeekdaySet {
        self.weekend
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.profile
            .adjustment
            .apply(date, self.profile.base.is_holiday(date))
    }
}
