//! Criterion benchmarks for schedule generation.
//!
//! Measures generation cost across observation frequencies and maturities
//! to characterise scaling with period count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use notes_core::calendar::MarketCalendar;
use notes_core::types::Date;
use notes_models::product::{BarrierSchedule, CouponSchedule, ProductConfig, Underlying};
use notes_models::schedule::{generate, Frequency};

/// Build a standard config with the given maturity in years.
fn standard_config(frequency: Frequency, years: u32) -> ProductConfig {
    let trade = Date::from_ymd(2024, 1, 15).unwrap();
    ProductConfig::builder()
        .trade_date(trade)
        .final_observation_date(trade.add_months(12 * years).unwrap())
        .frequency(frequency)
        .cool_off_periods(2)
        .delay_days(2)
        .step_down_per_period(-1.0)
        .coupon_barrier(BarrierSchedule::Flat(70.0))
        .coupon_rate(CouponSchedule::Flat(1.25))
        .protection_barrier(60.0)
        .underlying(Underlying::new("SX5E", 4_900.0))
        .calendars(vec![
            MarketCalendar::UnitedStates,
            MarketCalendar::Eurozone,
            MarketCalendar::UnitedKingdom,
        ])
        .build()
        .unwrap()
}

/// Benchmark standard-variant schedule generation.
fn bench_generate_standard(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_standard");

    for (label, frequency, years) in [
        ("quarterly_1y", Frequency::Quarterly, 1),
        ("quarterly_5y", Frequency::Quarterly, 5),
        ("monthly_10y", Frequency::Monthly, 10),
    ] {
        let config = standard_config(frequency, years);
        group.bench_with_input(BenchmarkId::from_parameter(label), &config, |b, config| {
            b.iter(|| generate(black_box(config)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_standard);
criterion_main!(benches);
