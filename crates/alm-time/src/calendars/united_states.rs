//! United States calendars.

use super::rules::{HolidayRule, Observance};
use super::NamedCalendar;
use crate::weekday::Weekday::{Friday, Monday, Thursday};

use HolidayRule::{Easter, Fixed};

/// United States — Settlement (federal holidays) calendar.
///
/// Holidays:
/// * New Year's Day (Jan 1; if Sun → Mon; if Sat → Fri)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1983)
/// * Presidents' Day (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, from 2022; if Sun → Mon; if Sat → Fri)
/// * Independence Day (Jul 4; if Sun → Mon; if Sat → Fri)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans' Day (Nov 11; if Sun → Mon; if Sat → Fri)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25; if Sun → Mon; if Sat → Fri)
pub static SETTLEMENT: NamedCalendar = NamedCalendar::new(
    "united_states_settlement",
    "US (Settlement)",
    SETTLEMENT_RULES,
);

const SETTLEMENT_RULES: &[Observance] = &[
    Observance::always("New Year's Day", Fixed { month: 1, day: 1 }),
    Observance::always("New Year's Day", HolidayRule::on_weekday(Monday, 1, 2)),
    Observance::always("New Year's Day", HolidayRule::on_weekday(Friday, 12, 31)),
    Observance::always("Martin Luther King Jr. Day", HolidayRule::nth_weekday(3, Monday, 1)).since(1983),
    Observance::always("Presidents' Day", HolidayRule::nth_weekday(3, Monday, 2)),
    Observance::always("Memorial Day", HolidayRule::last_weekday(Monday, 5)),
    Observance::always("Juneteenth", Fixed { month: 6, day: 19 }).since(2022),
    Observance::always("Juneteenth", HolidayRule::on_weekday(Monday, 6, 20)).since(2022),
    Observance::always("Juneteenth", HolidayRule::on_weekday(Friday, 6, 18)).since(2022),
    Observance::always("Independence Day", Fixed { month: 7, day: 4 }),
    Observance::always("Independence Day", HolidayRule::on_weekday(Monday, 7, 5)),
    Observance::always("Independence Day", HolidayRule::on_weekday(Friday, 7, 3)),
    Observance::always("Labor Day", HolidayRule::nth_weekday(1, Monday, 9)),
    Observance::always("Columbus Day", HolidayRule::nth_weekday(2, Monday, 10)),
    Observance::always("Veterans' Day", Fixed { month: 11, day: 11 }),
    Observance::always("Veterans' Day", HolidayRule::on_weekday(Monday, 11, 12)),
    Observance::always("Veterans' Day", HolidayRule::on_weekday(Friday, 11, 10)),
    Observance::always("Thanksgiving", HolidayRule::nth_weekday(4, Thursday, 11)),
    Observance::always("Christmas", Fixed { month: 12, day: 25 }),
    Observance::always("Christmas", HolidayRule::on_weekday(Monday, 12, 26)),
    Observance::always("Christmas", HolidayRule::on_weekday(Friday, 12, 24)),
];

/// United States — NYSE calendar.
///
/// As the settlement calendar, except that Good Friday is a holiday, Columbus
/// and Veterans' Day are not, a Saturday New Year's Day is not moved, and the
/// exchange's historical closings are included.
pub static NYSE: NamedCalendar = NamedCalendar::new("united_states_nyse", "US (NYSE)", NYSE_RULES);

const NYSE_RULES: &[Observance] = &[
    Observance::always("New Year's Day", Fixed { month: 1, day: 1 }),
    Observance::always("New Year's Day", HolidayRule::on_weekday(Monday, 1, 2)),
    Observance::always("Martin Luther King Jr. Day", HolidayRule::nth_weekday(3, Monday, 1)).since(1998),
    Observance::always("Washington's Birthday", HolidayRule::nth_weekday(3, Monday, 2)),
    Observance::always("Good Friday", Easter { offset: -3 }),
    Observance::always("Memorial Day", HolidayRule::last_weekday(Monday, 5)),
    Observance::always("Juneteenth", Fixed { month: 6, day: 19 }).since(2022),
    Observance::always("Juneteenth", HolidayRule::on_weekday(Monday, 6, 20)).since(2022),
    Observance::always("Juneteenth", HolidayRule::on_weekday(Friday, 6, 18)).since(2022),
    Observance::always("Independence Day", Fixed { month: 7, day: 4 }),
    Observance::always("Independence Day", HolidayRule::on_weekday(Monday, 7, 5)),
    Observance::always("Independence Day", HolidayRule::on_weekday(Friday, 7, 3)),
    Observance::always("Labor Day", HolidayRule::nth_weekday(1, Monday, 9)),
    Observance::always("Thanksgiving", HolidayRule::nth_weekday(4, Thursday, 11)),
    Observance::always("Christmas", Fixed { month: 12, day: 25 }),
    Observance::always("Christmas", HolidayRule::on_weekday(Monday, 12, 26)),
    Observance::always("Christmas", HolidayRule::on_weekday(Friday, 12, 24)),
    // historical closings
    Observance::once("Hurricane Sandy", 2012, 10, 29),
    Observance::once("Hurricane Sandy", 2012, 10, 30),
    Observance::once("President Reagan's funeral", 2004, 6, 11),
    Observance::once("September 11", 2001, 9, 11),
    Observance::once("September 11", 2001, 9, 12),
    Observance::once("September 11", 2001, 9, 13),
    Observance::once("September 11", 2001, 9, 14),
    Observance::once("President Nixon's funeral", 1994, 4, 27),
    Observance::once("Hurricane Gloria", 1985, 9, 27),
    Observance::once("1977 Blackout", 1977, 7, 14),
    Observance::once("President Johnson's funeral", 1973, 1, 25),
    Observance::once("President Truman's funeral", 1972, 12, 28),
    Observance::once("Lunar exploration", 1969, 7, 21),
    Observance::once("President Eisenhower's funeral", 1969, 3, 31),
    Observance::once("Heavy snow", 1969, 2, 10),
    Observance::once("Day after Independence Day", 1968, 7, 5),
    Observance::once("Mourning for Martin Luther King", 1968, 4, 9),
    Observance::once("President Kennedy's funeral", 1963, 11, 25),
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
    fn independence_day_2023() {
        // July 4, 2023 is a Tuesday
        assert!(!SETTLEMENT.is_business_day(date(2023, 7, 4)));
        assert_eq!(SETTLEMENT.holiday_name(date(2023, 7, 4)), Some("Independence Day"));
    }

    #[test]
    fn thanksgiving_2023() {
        // 4th Thursday of November 2023 = Nov 23
        assert!(!SETTLEMENT.is_business_day(date(2023, 11, 23)));
        assert!(!NYSE.is_business_day(date(2023, 11, 23)));
    }

    #[test]
    fn observed_on_friday() {
        // Jan 1 2022 is a Saturday, observed on Friday Dec 31 2021 by settlement
        assert!(SETTLEMENT.is_holiday(date(2021, 12, 31)));
        assert!(!NYSE.is_holiday(date(2021, 12, 31)));
    }

    #[test]
    fn nyse_specifics() {
        // Good Friday 2023 = April 7
        assert!(NYSE.is_holiday(date(2023, 4, 7)));
        assert!(!SETTLEMENT.is_holiday(date(2023, 4, 7)));
        // Columbus Day 2023 = Oct 9
        assert!(SETTLEMENT.is_holiday(date(2023, 10, 9)));
        assert!(!NYSE.is_holiday(date(2023, 10, 9)));
        assert!(NYSE.is_holiday(date(2012, 10, 30)));
    }

    #[test]
    fn juneteenth_from_2022() {
        assert!(SETTLEMENT.is_business_day(date(2021, 6, 18)));
        assert!(SETTLEMENT.is_holiday(date(2023, 6, 19)));
    }

    #[test]
    fn normal_day() {
        assert!(SETTLEMENT.is_business_day(date(2023, 6, 15)));
    }
}
