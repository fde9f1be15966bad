//! Integration tests: product configuration through schedule generation.

use notes_core::calendar::MarketCalendar;
use notes_core::types::Date;
use notes_models::product::{
    BarrierSchedule, ConfigError, CouponSchedule, ProductConfig, TemplateVariant, Underlying,
};
use notes_models::schedule::{generate, Frequency, ScheduleError};

fn autocall_config() -> ProductConfig {
    ProductConfig::builder()
        .trade_date(Date::from_ymd(2024, 1, 15).unwrap())
        .final_observation_date(Date::from_ymd(2025, 1, 15).unwrap())
        .frequency(Frequency::Quarterly)
        .cool_off_periods(1)
        .initial_autocall_level(100.0)
        .step_down_per_period(-5.0)
        .coupon_barrier(BarrierSchedule::Flat(70.0))
        .coupon_rate(CouponSchedule::Flat(1.25))
        .protection_barrier(60.0)
        .underlying(Underlying::new("SX5E", 4_900.0))
        .underlying(Underlying::new("UKX", 7_600.0))
        .calendars(vec![
            MarketCalendar::UnitedStates,
            MarketCalendar::Eurozone,
            MarketCalendar::UnitedKingdom,
        ])
        .build()
        .unwrap()
}

#[test]
fn quarterly_note_generates_stepped_callable_schedule() {
    let schedule = generate(&autocall_config()).unwrap();

    assert_eq!(schedule.len(), 4);

    // Cool-off: period 1 cannot autocall.
    assert!(!schedule.period(1).unwrap().is_callable());
    assert_eq!(schedule.period(1).unwrap().autocall_level(), None);

    // Step-down across callable periods.
    assert_eq!(schedule.period(2).unwrap().autocall_level(), Some(100.0));
    assert_eq!(schedule.period(3).unwrap().autocall_level(), Some(95.0));
    assert_eq!(schedule.period(4).unwrap().autocall_level(), Some(90.0));
    assert!(schedule.period(4).unwrap().is_final());
}

#[test]
fn generated_dates_avoid_weekends_and_holidays() {
    let config = autocall_config();
    let schedule = generate(&config).unwrap();

    for period in schedule.iter() {
        assert!(!period.observation_date().is_weekend());
        assert!(!period.value_date().is_weekend());
        for market in &config.calendars {
            assert!(!market.is_holiday(period.observation_date()));
            assert!(!market.is_holiday(period.value_date()));
        }
    }
}

#[test]
fn reversed_dates_are_a_configuration_error_not_an_empty_schedule() {
    let result = ProductConfig::builder()
        .trade_date(Date::from_ymd(2025, 1, 15).unwrap())
        .final_observation_date(Date::from_ymd(2024, 1, 15).unwrap())
        .frequency(Frequency::Quarterly)
        .coupon_barrier(BarrierSchedule::Flat(70.0))
        .coupon_rate(CouponSchedule::Flat(1.25))
        .protection_barrier(60.0)
        .underlying(Underlying::new("SX5E", 4_900.0))
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidDateRange { .. })));
}

#[test]
fn manual_edit_keeps_or_rejects_ordering() {
    let schedule = generate(&autocall_config()).unwrap();

    // Nudging a date inside its slot is fine.
    let p2 = schedule.period(2).unwrap();
    let edited = schedule
        .with_edited_dates(
            2,
            p2.observation_date().add_days(1).unwrap(),
            p2.value_date().add_days(1).unwrap(),
        )
        .unwrap();
    assert_eq!(
        edited.period(2).unwrap().observation_date(),
        p2.observation_date().add_days(1).unwrap()
    );

    // Dragging it before period 1 is rejected, not reordered.
    let before_first = schedule
        .period(1)
        .unwrap()
        .observation_date()
        .add_days(-10)
        .unwrap();
    let result = schedule.with_edited_dates(2, before_first, before_first);
    assert!(matches!(
        result,
        Err(ScheduleError::NonMonotonicDates { .. })
    ));
}

#[test]
fn himalaya_schedule_has_one_observation_per_underlying() {
    let config = ProductConfig::builder()
        .trade_date(Date::from_ymd(2024, 1, 1).unwrap())
        .final_observation_date(Date::from_ymd(2024, 12, 31).unwrap())
        .frequency(Frequency::Quarterly)
        .coupon_barrier(BarrierSchedule::Flat(70.0))
        .coupon_rate(CouponSchedule::Flat(1.0))
        .protection_barrier(60.0)
        .underlyings(vec![
            Underlying::new("A", 100.0),
            Underlying::new("B", 100.0),
            Underlying::new("C", 100.0),
            Underlying::new("D", 100.0),
        ])
        .variant(TemplateVariant::Himalaya)
        .calendar(MarketCalendar::UnitedStates)
        .build()
        .unwrap();

    let schedule = generate(&config).unwrap();
    assert_eq!(schedule.len(), 4);
    for period in schedule.iter() {
        assert_eq!(period.autocall_level(), None);
        assert_eq!(period.coupon_barrier(), None);
    }
}
