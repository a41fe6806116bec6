//! TARGET (Trans-European Automated Real-time Gross Settlement) calendar.

use super::rules::{HolidayRule, Observance};
use super::NamedCalendar;

use HolidayRule::{Easter, Fixed};

/// TARGET calendar (ECB's settlement system).
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Good Friday and Easter Monday (from 2000)
/// * Labour Day (May 1, from 2000)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26, from 2000)
/// * December 31 in 1998, 1999 and 2001
pub static TARGET: NamedCalendar = NamedCalendar::new("target", "TARGET", TARGET_RULES);

const TARGET_RULES: &[Observance] = &[
    Observance::always("New Year's Day", Fixed { month: 1, day: 1 }),
    Observance::always("Good Friday", Easter { offset: -3 }).since(2000),
    Observance::always("Easter Monday", Easter { offset: 0 }).since(2000),
    Observance::always("Labour Day", Fixed { month: 5, day: 1 }).since(2000),
    Observance::always("Christmas", Fixed { month: 12, day: 25 }),
    Observance::always("Boxing Day", Fixed { month: 12, day: 26 }).since(2000),
    Observance::once("Year end closing", 1998, 12, 31),
    Observance::once("Year end closing", 1999, 12, 31),
    Observance::once("Year end closing", 2001, 12, 31),
];
