use merch_calendar::{
    comparison_day, merch_week, period_range, season_range, week_range, year_to_date, Date,
    MerchYear, Season, Week53Policy,
};

fn d(year: i32, month: u8, day: u8) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

#[test]
fn restatement_is_identity_without_extra_week() {
    let my = MerchYear::new(2024).unwrap();
    for date in my.range().iter().step_by(13) {
        assert_eq!(
            merch_week(date, true).unwrap(),
            merch_week(date, false).unwrap(),
            "{date}"
        );
    }
    for week in 1..=52u8 {
        assert_eq!(
            week_range(week, 2024, true).unwrap(),
            week_range(week, 2024, false).unwrap()
        );
    }
    for period in 1..=12u8 {
        assert_eq!(
            period_range(period, 2024, true).unwrap(),
            period_range(period, 2024, false).unwrap()
        );
    }
}

#[test]
fn restated_weeks_shift_down_by_one() {
    // In a 53-week year every raw week N restates to N - 1; raw week 1 is
    // the lost week and reports the sentinel 0.
    let my = MerchYear::new(2023).unwrap();
    for (i, date) in my.range().iter().enumerate() {
        let raw = merch_week(date, false).unwrap();
        let restated = merch_week(date, true).unwrap();
        assert_eq!(raw, (i / 7) as u8 + 1);
        assert_eq!(restated, raw - 1, "{date}");
    }
}

#[test]
fn restated_range_is_raw_range_of_next_week() {
    for week in 0..=52u8 {
        assert_eq!(
            week_range(week, 2023, true).unwrap(),
            week_range(week + 1, 2023, false).unwrap(),
            "week {week}"
        );
    }
}

#[test]
fn restated_week_roundtrip() {
    // Restated week numbers and restated ranges agree with each other.
    for week in 1..=52u8 {
        let range = week_range(week, 2023, true).unwrap();
        assert_eq!(merch_week(range.start(), true).unwrap(), week);
    }
}

#[test]
fn restated_year_aligns_with_52_week_convention() {
    // Restated FY2023 starts one raw week in and covers 52 weeks, so its
    // year-to-date spans align positionally with FY2024's.
    let restated_start = period_range(1, 2023, true).unwrap().start();
    assert_eq!(restated_start, d(2023, 2, 5));
    let ytd = year_to_date(d(2023, 2, 5), true).unwrap();
    assert_eq!(ytd.days(), 1);
}

#[test]
fn restated_season_ends_on_year_end() {
    // Restated Fall of a 53-week year still ends on the true year end
    // (restated week 52 is raw week 53).
    let fall = season_range(Season::Fall, 2023, true).unwrap();
    assert_eq!(fall.end(), MerchYear::new(2023).unwrap().range().end());
    assert_eq!(fall.days(), 26 * 7);
}

#[test]
fn week_53_comparison_policies() {
    // January 31, 2024 sits in week 53 of FY2023 (a Wednesday).
    let date = d(2024, 1, 31);
    assert_eq!(merch_week(date, false).unwrap(), 53);

    // NonComp: explicitly absent, not an error.
    assert_eq!(
        comparison_day(date, 2023, Week53Policy::NonComp).unwrap(),
        None
    );

    // AddWeek: Wednesday of week 1 of FY2024.
    let add = comparison_day(date, 2023, Week53Policy::AddWeek).unwrap().unwrap();
    assert_eq!(add, d(2024, 2, 7));
    assert_eq!(merch_week(add, false).unwrap(), 1);

    // SubtractWeek: Wednesday of week 52 of FY2023.
    let sub = comparison_day(date, 2023, Week53Policy::SubtractWeek)
        .unwrap()
        .unwrap();
    assert_eq!(sub, d(2024, 1, 24));
    assert_eq!(merch_week(sub, false).unwrap(), 52);
}

#[test]
fn comparison_day_across_years() {
    // Week 10, Tuesday of FY2025 maps to week 10, Tuesday of FY2024.
    let date = d(2025, 4, 8);
    assert_eq!(merch_week(date, false).unwrap(), 10);
    let comp = comparison_day(date, 2024, Week53Policy::NonComp)
        .unwrap()
        .unwrap();
    assert_eq!(merch_week(comp, false).unwrap(), 10);
    assert_eq!(comp.weekday(), date.weekday());
    assert_eq!(comp, d(2024, 4, 9));
}
