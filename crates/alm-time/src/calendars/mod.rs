//! Named calendars (country / exchange specific).
//!
//! Each named calendar is an immutable, statically allocated rule set. They
//! are looked up by their snake-case identity, e.g. `"united_states"` or
//! `"argentina_merval"`; a bare country name resolves to the country's
//! default variant.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::weekday::WeekdaySet;
use alm_core::errors::{Error, Result};

/// Argentina (Merval).
pub mod argentina;

/// Holiday rule building blocks.
pub mod rules;

/// TARGET.
pub mod target;

/// United Kingdom (Settlement).
pub mod united_kingdom;

/// United States (Settlement, NYSE).
pub mod united_states;

use rules::{matching_observance, Observance};

/// A calendar defined by a static holiday rule set and a Saturday/Sunday
/// weekend.
#[derive(Debug)]
pub struct NamedCalendar {
    id: &'static str,
    name: &'static str,
    observances: &'static [Observance],
}

impl NamedCalendar {
    /// Define a named calendar.
    pub const fn new(id: &'static str, name: &'static str, observances: &'static [Observance]) -> Self {
        Self {
            id,
            name,
            observances,
        }
    }

    /// The canonical identity, e.g. `"united_states_settlement"`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Name of the holiday falling on `date`, if any.
    pub fn holiday_name(&self, date: Date) -> Option<&'static str> {
        matching_observance(self.observances, date).map(|o| o.name)
    }

    /// Return `true` if `date` is in the canonical holiday set.
    pub fn is_canonical_holiday(&self, date: Date) -> bool {
        matching_observance(self.observances, date).is_some()
    }
}

impl PartialEq for NamedCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NamedCalendar {}

impl Calendar for NamedCalendar {
    fn name(&self) -> &str {
        self.name
    }

    fn weekend(&self) -> WeekdaySet {
        WeekdaySet::SATURDAY_SUNDAY
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.is_canonical_holiday(date)
    }
}

/// Identity → calendar table. Aliases point at the same static.
static REGISTRY: [(&str, &NamedCalendar); 8] = [
    ("argentina", &argentina::MERVAL),
    ("argentina_merval", &argentina::MERVAL),
    ("target", &target::TARGET),
    ("united_kingdom", &united_kingdom::SETTLEMENT),
    ("united_kingdom_settlement", &united_kingdom::SETTLEMENT),
    ("united_states", &united_states::SETTLEMENT),
    ("united_states_settlement", &united_states::SETTLEMENT),
    ("united_states_nyse", &united_states::NYSE),
];

/// Resolve a calendar identity.
///
/// # Errors
/// [`Error::UnknownCalendar`] naming `identity` if it is not registered.
pub fn lookup(identity: &str) -> Result<&'static NamedCalendar> {
    REGISTRY
        .iter()
        .find(|(id, _)| *id == identity)
        .map(|(_, cal)| *cal)
        .ok_or_else(|| Error::UnknownCalendar(identity.to_string()))
}

/// Every accepted identity, aliases included.
pub fn identities() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(id, _)| *id)
}
