//! Integration tests for `Date`, `Weekday`, `Period` and the identifier
//! parsers.

use std::collections::HashSet;

use alm_core::Error;
use alm_time::date::{days_in_month, is_leap_year};
use alm_time::{BusinessDayConvention, Date, Period, TimeUnit, Weekday, WeekdaySet};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn consistency_over_full_range() {
    let first = Date::MIN;
    let mut prev = first.ymd();
    let mut prev_doy = first.day_of_year();
    let mut prev_wd = first.weekday().ordinal();

    for t in first.through(Date::MAX).skip(1) {
        let (y, m, d) = t.ymd();
        let (py, pm, pd) = prev;

        assert!(
            (d == pd + 1 && m == pm && y == py)
                || (d == 1 && m == pm + 1 && y == py)
                || (d == 1 && m == 1 && y == py + 1),
            "wrong day/month/year increment: {t}, prev {py}-{pm}-{pd}"
        );

        let doy = t.day_of_year();
        assert!(
            doy == prev_doy + 1
                || (doy == 1 && prev_doy == 365 && !is_leap_year(py))
                || (doy == 1 && prev_doy == 366 && is_leap_year(py)),
            "wrong day of year increment: {t}"
        );

        assert!(d >= 1 && d <= days_in_month(y, m), "invalid day of month: {t}");

        let wd = t.weekday().ordinal();
        assert!(wd == prev_wd + 1 || (wd == 1 && prev_wd == 7), "invalid weekday: {t}");

        assert_eq!(date(y, m, d), t, "ymd roundtrip failed for {t}");
        assert_eq!(Date::from_unix_days(t.unix_days()).unwrap(), t);

        prev = (y, m, d);
        prev_doy = doy;
        prev_wd = wd;
    }
}

#[test]
fn range_bounds() {
    assert_eq!(Date::MIN, date(1900, 1, 1));
    assert_eq!(Date::MAX, date(2199, 12, 31));
    assert!(Date::MIN.add_days(-1).is_err());
    assert!(Date::MAX.add_days(1).is_err());
    assert!(Date::from_ymd(2200, 1, 1).is_err());
}

#[test]
fn unix_epoch() {
    let epoch = date(1970, 1, 1);
    assert_eq!(epoch.unix_days(), 0);
    assert_eq!(Date::from_unix_days(16921).unwrap(), date(2016, 4, 30));
    assert_eq!(date(1969, 12, 31).unix_days(), -1);
}

#[test]
fn can_hash() {
    let dates: HashSet<Date> = date(2020, 1, 1).through(date(2020, 12, 31)).collect();
    assert_eq!(dates.len(), 366);
    assert!(dates.contains(&date(2020, 2, 29)));
}

#[test]
fn iso_parsing() {
    assert_eq!("2016-04-30".parse::<Date>().unwrap(), date(2016, 4, 30));
    assert_eq!(date(2016, 4, 30).to_string(), "2016-04-30");
    for bad in ["2016-4-30x", "2016/04/30", "", "2016-02-30"] {
        assert!(matches!(bad.parse::<Date>(), Err(Error::Date(_))), "{bad:?}");
    }
}

#[test]
fn month_arithmetic_clamps() {
    assert_eq!(date(2021, 1, 31).advance(1, TimeUnit::Month).unwrap(), date(2021, 2, 28));
    assert_eq!(date(2020, 2, 29).advance(1, TimeUnit::Year).unwrap(), date(2021, 2, 28));
    assert_eq!(date(2021, 3, 31).advance(-1, TimeUnit::Month).unwrap(), date(2021, 2, 28));
    assert_eq!(date(2021, 1, 15).advance(-2, TimeUnit::Week).unwrap(), date(2021, 1, 1));
}

#[test]
fn weekday_codes() {
    assert_eq!(Weekday::from_code(1).unwrap(), Weekday::Sunday);
    assert_eq!(Weekday::from_code(7).unwrap(), Weekday::Saturday);
    assert_eq!(Weekday::from_code(8).unwrap_err(), Error::UnknownWeekday(8));
    assert_eq!(WeekdaySet::from_codes(&[1, 7]).unwrap(), WeekdaySet::SATURDAY_SUNDAY);
    assert_eq!(date(2016, 4, 30).weekday().code(), 7);
}

#[test]
fn identifiers_parse() {
    assert_eq!(
        "modified_following".parse::<BusinessDayConvention>().unwrap(),
        BusinessDayConvention::ModifiedFollowing
    );
    assert_eq!(
        "sideways".parse::<BusinessDayConvention>().unwrap_err(),
        Error::UnknownConvention("sideways".into())
    );
    assert_eq!("week".parse::<TimeUnit>().unwrap(), TimeUnit::Week);
    assert!(matches!("fortnight".parse::<TimeUnit>(), Err(Error::UnknownUnit(_))));
    assert_eq!("3M".parse::<Period>().unwrap(), Period::new(3, TimeUnit::Month));
}

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial()).prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn month_advance_keeps_or_clamps_day(d in any_date(), n in -120i32..120) {
        if let Ok(moved) = d.advance(n, TimeUnit::Month) {
            let expected = d.day_of_month().min(days_in_month(moved.year(), moved.month()));
            prop_assert_eq!(moved.day_of_month(), expected);
        }
    }

    #[test]
    fn day_advance_matches_difference(d in any_date(), n in -1000i32..1000) {
        if let Ok(moved) = d.add_days(n) {
            prop_assert_eq!(moved - d, n);
        }
    }

    #[test]
    fn iso_string_roundtrips(d in any_date()) {
        prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
    }
}
