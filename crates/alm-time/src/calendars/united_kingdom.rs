//! United Kingdom calendars.

use super::rules::{HolidayRule, Observance};
use super::NamedCalendar;
use crate::weekday::Weekday::{Monday, Tuesday};

use HolidayRule::{Easter, Fixed};

/// United Kingdom — Settlement (London) calendar.
///
/// Holidays:
/// * New Year's Day (Jan 1; if on a weekend, the following Monday)
/// * Good Friday and Easter Monday
/// * Early May Bank Holiday (1st Mon in May)
/// * Spring Bank Holiday (last Mon in May)
/// * Summer Bank Holiday (last Mon in Aug)
/// * Christmas Day and Boxing Day, moved past the weekend
/// * One-off bank holidays for jubilees, royal events and the millennium
pub static SETTLEMENT: NamedCalendar = NamedCalendar::new(
    "united_kingdom_settlement",
    "UK (Settlement)",
    SETTLEMENT_RULES,
);

const SETTLEMENT_RULES: &[Observance] = &[
    Observance::always("New Year's Day", Fixed { month: 1, day: 1 }),
    Observance::always(
        "New Year's Day",
        HolidayRule::WeekdayInWindow {
            weekday: Monday,
            month: 1,
            first: 2,
            last: 3,
        },
    ),
    Observance::always("Good Friday", Easter { offset: -3 }),
    Observance::always("Easter Monday", Easter { offset: 0 }),
    Observance::always("Early May Bank Holiday", HolidayRule::nth_weekday(1, Monday, 5)).except(&[1995, 2020]),
    Observance::once("VE Day", 1995, 5, 8),
    Observance::once("VE Day", 2020, 5, 8),
    Observance::always("Spring Bank Holiday", HolidayRule::last_weekday(Monday, 5)).except(&[2002, 2012, 2022]),
    Observance::once("Spring Bank Holiday", 2002, 6, 4),
    Observance::once("Spring Bank Holiday", 2012, 6, 4),
    Observance::once("Spring Bank Holiday", 2022, 6, 2),
    Observance::always("Summer Bank Holiday", HolidayRule::last_weekday(Monday, 8)),
    Observance::always("Christmas", Fixed { month: 12, day: 25 }),
    Observance::always("Christmas", HolidayRule::on_weekday(Monday, 12, 27)),
    Observance::always("Christmas", HolidayRule::on_weekday(Tuesday, 12, 27)),
    Observance::always("Boxing Day", Fixed { month: 12, day: 26 }),
    Observance::always("Boxing Day", HolidayRule::on_weekday(Monday, 12, 28)),
    Observance::always("Boxing Day", HolidayRule::on_weekday(Tuesday, 12, 28)),
    Observance::once("Millennium", 1999, 12, 31),
    Observance::once("Golden Jubilee", 2002, 6, 3),
    Observance::once("Royal Wedding", 2011, 4, 29),
    Observance::once("Diamond Jubilee", 2012, 6, 5),
    Observance::once("Platinum Jubilee", 2022, 6, 3),
    Observance::once("State Funeral", 2022, 9, 19),
    Observance::once("Coronation", 2023, 5, 8),
];
