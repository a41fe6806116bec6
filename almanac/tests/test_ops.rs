//! End-to-end tests of the vectorised operations.

use almanac::core::Error;
use almanac::ops::{self, SeqOptions};
use almanac::time::{CompoundPeriod, Date};
use almanac::CalendarSpec;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn weekends() -> CalendarSpec {
    CalendarSpec::custom([1, 7])
}

#[test]
fn predicates_propagate_missing() {
    let spec = CalendarSpec::named("united_states");
    let dates = [Some(date(2016, 4, 30)), None, Some(date(2023, 7, 4)), Some(date(2023, 7, 5))];
    assert_eq!(
        ops::is_business_day(&dates, &spec).unwrap(),
        vec![Some(false), None, Some(false), Some(true)]
    );
    assert_eq!(
        ops::is_weekend(&dates, &spec).unwrap(),
        vec![Some(true), None, Some(false), Some(false)]
    );
    assert_eq!(
        ops::is_holiday(&dates, &spec).unwrap(),
        vec![Some(false), None, Some(true), Some(false)]
    );
    assert_eq!(
        ops::is_end_of_month(&[Some(date(2016, 4, 30)), None], &spec).unwrap(),
        vec![Some(true), None]
    );
}

#[test]
fn adjust_and_unknown_convention() {
    let spec = weekends();
    assert_eq!(
        ops::adjust(&[Some(date(2016, 4, 30))], "following", &spec).unwrap(),
        vec![Some(date(2016, 5, 2))]
    );
    assert_eq!(
        ops::adjust(&[Some(date(2016, 4, 30))], "half_month_modified_following", &spec).unwrap(),
        vec![Some(date(2016, 4, 29))]
    );
    assert_eq!(
        ops::adjust(&[None], "backwards", &spec).unwrap_err(),
        Error::UnknownConvention("backwards".into())
    );
}

#[test]
fn adjust_to_last_business_day_of_month() {
    // 2016-04-30 is a Saturday and the Friday before is closed
    let spec = weekends().with_holidays([date(2016, 4, 29)]);
    let dates = [Some(date(2016, 4, 15)), None, Some(date(2016, 4, 30)), Some(date(2021, 2, 10))];
    assert_eq!(
        ops::adjust_end_of_month(&dates, &spec).unwrap(),
        vec![Some(date(2016, 4, 28)), None, Some(date(2016, 4, 28)), Some(date(2021, 2, 26))]
    );
}

#[test]
fn advance_by_months_with_end_of_month() {
    let spec = weekends();
    let out = ops::advance(&[Some(date(2016, 2, 29)), None], 2, "month", "following", true, &spec).unwrap();
    assert_eq!(out, vec![Some(date(2016, 4, 29)), None]);
    assert!(matches!(
        ops::advance(&[], 1, "decade", "following", false, &spec),
        Err(Error::UnknownUnit(_))
    ));
}

#[test]
fn shift_compound_period() {
    let spec = CalendarSpec::named("united_states").with_holidays([date(2023, 7, 5)]);
    let out = ops::shift(
        &[Some(date(2022, 6, 3))],
        CompoundPeriod::new(1, 1, 1),
        "following",
        false,
        &spec,
    )
    .unwrap();
    // July 4th and the added 5th are skipped
    assert_eq!(out, vec![Some(date(2023, 7, 6))]);
}

#[test]
fn counting_is_signed_and_recycled() {
    let spec = weekends();
    let monday = Some(date(2021, 1, 4));
    let stops = [Some(date(2021, 1, 8)), Some(date(2021, 1, 11)), None, Some(date(2020, 12, 28))];
    assert_eq!(
        ops::count_business_days_between(&[monday], &stops, &spec).unwrap(),
        vec![Some(4), Some(5), None, Some(-5)]
    );
    assert!(matches!(
        ops::count_business_days_between(&[monday, monday], &stops, &spec),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn holidays_between_scalar_range() {
    let spec = CalendarSpec::named("united_kingdom");
    let (start, stop) = (Some(date(2021, 12, 20)), Some(date(2022, 1, 5)));
    assert_eq!(
        ops::holidays_between(start, stop, false, &spec).unwrap(),
        vec![date(2021, 12, 27), date(2021, 12, 28), date(2022, 1, 3)]
    );
    assert!(ops::holidays_between(None, stop, false, &spec).unwrap().is_empty());
    assert!(matches!(
        ops::holidays_between(stop, start, false, &spec),
        Err(Error::InvalidRange(_))
    ));
}

#[test]
fn seq_month_ends() {
    let options = SeqOptions {
        end_of_month: true,
        ..SeqOptions::default()
    };
    let dates = ops::seq(
        Some(date(2021, 1, 31)),
        Some(date(2021, 4, 30)),
        1,
        "month",
        options,
        &weekends(),
    )
    .unwrap();
    assert_eq!(dates, vec![date(2021, 1, 31), date(2021, 2, 28), date(2021, 3, 31), date(2021, 4, 30)]);
}

#[test]
fn seq_requires_both_endpoints() {
    let err = ops::seq(None, Some(date(2021, 1, 1)), 1, "day", SeqOptions::default(), &weekends()).unwrap_err();
    assert!(matches!(err, Error::InvalidRange(_)));
}

#[test]
fn calendar_errors_surface() {
    let dates = [Some(date(2021, 1, 4))];
    assert_eq!(
        ops::is_holiday(&dates, &CalendarSpec::named("atlantis")).unwrap_err(),
        Error::UnknownCalendar("atlantis".into())
    );
    assert_eq!(
        ops::is_holiday(&dates, &CalendarSpec::custom([9])).unwrap_err(),
        Error::UnknownWeekday(9)
    );
    let spec = CalendarSpec {
        holidays: vec![None],
        ..CalendarSpec::named("target")
    };
    assert!(matches!(ops::is_holiday(&dates, &spec), Err(Error::MissingRequiredDate(_))));
}

#[test]
fn spec_from_json_document() {
    let spec = CalendarSpec::from_json(r#"{ "name": "empty", "weekends": [6, 7], "holidays": ["2021-01-06"] }"#)
        .unwrap();
    let dates = [Some(date(2021, 1, 6)), Some(date(2021, 1, 8)), Some(date(2021, 1, 10))];
    assert_eq!(
        ops::is_business_day(&dates, &spec).unwrap(),
        vec![Some(false), Some(false), Some(true)]
    );
}
