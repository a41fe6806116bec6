//! Argentina calendars.

use super::rules::{HolidayRule, Observance};
use super::NamedCalendar;
use crate::weekday::Weekday;

use HolidayRule::{Easter, Fixed};

/// Buenos Aires stock exchange (Merval).
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Holy Thursday and Good Friday
/// * Labour Day (May 1)
/// * May Revolution (May 25)
/// * Death of General Manuel Belgrano (3rd Monday of June)
/// * Independence Day (Jul 9)
/// * Death of General José de San Martín (3rd Monday of August)
/// * Columbus Day (Oct 12, moved to the nearby Monday)
/// * Immaculate Conception (Dec 8)
/// * Christmas Eve and Christmas Day (Dec 24–25)
/// * New Year's Eve (Dec 31, or Friday Dec 30)
pub static MERVAL: NamedCalendar =
    NamedCalendar::new("argentina_merval", "Argentina (Merval)", MERVAL_RULES);

const MERVAL_RULES: &[Observance] = &[
    Observance::always("New Year's Day", Fixed { month: 1, day: 1 }),
    Observance::always("Holy Thursday", Easter { offset: -4 }),
    Observance::always("Good Friday", Easter { offset: -3 }),
    Observance::always("Labour Day", Fixed { month: 5, day: 1 }),
    Observance::always("May Revolution", Fixed { month: 5, day: 25 }),
    Observance::always("Death of Belgrano", HolidayRule::nth_weekday(3, Weekday::Monday, 6)),
    Observance::always("Independence Day", Fixed { month: 7, day: 9 }),
    Observance::always("Death of San Martin", HolidayRule::nth_weekday(3, Weekday::Monday, 8)),
    // Tuesday/Wednesday moves back to Monday 10-11, Thursday/Friday forward to 15-16
    Observance::always(
        "Columbus Day",
        HolidayRule::WeekdayInWindow {
            weekday: Weekday::Monday,
            month: 10,
            first: 10,
            last: 12,
        },
    ),
    Observance::always(
        "Columbus Day",
        HolidayRule::WeekdayInWindow {
            weekday: Weekday::Monday,
            month: 10,
            first: 15,
            last: 16,
        },
    ),
    Observance::always("Immaculate Conception", Fixed { month: 12, day: 8 }),
    Observance::always("Christmas Eve", Fixed { month: 12, day: 24 }),
    Observance::always("Christmas", Fixed { month: 12, day: 25 }),
    Observance::always("New Year's Eve", Fixed { month: 12, day: 31 }),
    Observance::always("New Year's Eve", HolidayRule::on_weekday(Weekday::Friday, 12, 30)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_holidays_2023() {
        // Easter Sunday 2023: April 9
        assert!(MERVAL.is_holiday(date(2023, 4, 6)));
        assert!(MERVAL.is_holiday(date(2023, 4, 7)));
        assert!(MERVAL.is_business_day(date(2023, 4, 10)));
    }

    #[test]
    fn moving_mondays_2023() {
        // 3rd Monday of June and August
        assert!(MERVAL.is_holiday(date(2023, 6, 19)));
        assert!(MERVAL.is_holiday(date(2023, 8, 21)));
        // Oct 12 2023 is a Thursday, so Columbus Day moves to Monday 16th
        assert!(MERVAL.is_holiday(date(2023, 10, 16)));
        assert!(MERVAL.is_business_day(date(2023, 10, 12)));
    }

    #[test]
    fn year_end() {
        assert!(MERVAL.is_holiday(date(2021, 12, 24)));
        // Dec 31 2022 is a Saturday: Friday the 30th closes instead
        assert!(MERVAL.is_holiday(date(2022, 12, 30)));
        assert!(MERVAL.is_business_day(date(2021, 12, 30)));
    }

    #[test]
    fn normal_business_day() {
        // 2023-06-15 is a Thursday
        assert!(MERVAL.is_business_day(date(2023, 6, 15)));
    }
}
