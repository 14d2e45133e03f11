//! End-to-end checks of the chart core through the public API.

use coin_chart::{
    chart::{
        ChartModel, ChartStyle, ExtremaLabel, PeriodSelector, format_axis_timestamp, label_for,
        should_enlarge,
    },
    config::CURRENCIES,
    data::{DemoProvider, HistoryProvider, load_demo_coins},
    domain::{Currency, Extrema, Period, PricePoint},
};

fn points(raw: &[(i64, f64)]) -> Vec<PricePoint> {
    raw.iter().map(|&(t, p)| PricePoint::new(t, p)).collect()
}

#[test]
fn epoch_zero_is_the_unix_epoch_date() {
    assert_eq!(format_axis_timestamp(0), "1970-01-01");
    assert_eq!(format_axis_timestamp(0), format_axis_timestamp(0));
}

#[test]
fn labels_follow_exact_extrema_match() {
    let extrema = Extrema::new(10.0, 100.0);
    assert_eq!(label_for(&PricePoint::new(0, 10.0), &extrema), ExtremaLabel::Low);
    assert_eq!(label_for(&PricePoint::new(0, 100.0), &extrema), ExtremaLabel::High);
    assert_eq!(label_for(&PricePoint::new(0, 55.0), &extrema), ExtremaLabel::None);
}

#[test]
fn flat_series_is_all_low() {
    let extrema = Extrema::new(50.0, 50.0);
    let series = points(&[(0, 50.0), (60, 50.0), (120, 50.0)]);
    assert!(series.iter().all(|p| label_for(p, &extrema) == ExtremaLabel::Low));
}

#[test]
fn enlarge_exactly_at_min_or_max() {
    let extrema = Extrema::new(1.5, 3.0);
    let series = points(&[(0, 1.5), (1, 1.500_000_1), (2, 2.0), (3, 3.0), (4, 1.5)]);
    let enlarged: Vec<bool> = series.iter().map(|p| should_enlarge(p, &extrema)).collect();
    assert_eq!(enlarged, vec![true, false, false, true, true]);

    let empty: Vec<PricePoint> = Vec::new();
    assert!(!empty.iter().any(|p| should_enlarge(p, &extrema)));
}

#[test]
fn reselecting_active_period_still_emits() {
    let selector = PeriodSelector::new(Period::D7);
    let change = selector.select(Period::D7);
    assert_eq!(change.requested, Period::D7);
    assert!(change.is_reselect());
}

#[test]
fn three_point_example_marks_first_low_and_second_high() {
    let series = points(&[(0, 10.0), (86_400, 20.0), (172_800, 15.0)]);
    let extrema = Extrema::new(10.0, 20.0);
    let model = ChartModel::build(
        &series,
        Some(&extrema),
        Currency::Usd,
        &CURRENCIES,
        &ChartStyle::default(),
    );

    assert_eq!(model.annotations.len(), 2);
    assert_eq!(model.annotations[0].decoration.position, [0.0, 10.0]);
    assert_eq!(model.annotations[0].decoration.label, ExtremaLabel::Low);
    assert_eq!(model.annotations[1].decoration.position, [86_400.0, 20.0]);
    assert_eq!(model.annotations[1].decoration.label, ExtremaLabel::High);
    assert_eq!(model.tooltip_at(172_800.0), Some("1970-01-03\n$15.00"));
}

#[test]
fn malformed_input_degrades_instead_of_panicking() {
    let series = points(&[(0, f64::NAN), (60, f64::INFINITY)]);
    let model = ChartModel::build(
        &series,
        None,
        Currency::Eur,
        &CURRENCIES,
        &ChartStyle::default(),
    );
    assert!(model.is_empty());
    assert_eq!(model.skipped, 2);
    assert!(model.annotations.is_empty());
}

#[test]
fn demo_history_feeds_the_chart() {
    let coins = load_demo_coins().unwrap();
    let coin = coins[0].clone();
    let provider = DemoProvider::new(coins).without_latency();

    let series = provider
        .fetch_history(&coin.id, Currency::Usd, Period::D30)
        .unwrap();
    assert_eq!(series.len(), Period::D30.sample_count() + 1);
    let last = series.last().unwrap();
    assert!((last.price - coin.price).abs() < coin.price * 1e-9);

    let extrema = Extrema::of(&series).unwrap();
    let model = ChartModel::build(
        &series,
        Some(&extrema),
        Currency::Usd,
        &CURRENCIES,
        &ChartStyle::default(),
    );
    assert!(model.annotations.iter().any(|a| a.decoration.label == ExtremaLabel::Low));
    assert!(model.annotations.iter().any(|a| a.decoration.label == ExtremaLabel::High));
    assert!(model.x_ticks.len() <= ChartStyle::default().x_tick_count);
}

#[test]
fn unknown_coin_is_an_error_not_a_panic() {
    let provider = DemoProvider::new(load_demo_coins().unwrap()).without_latency();
    assert!(
        provider
            .fetch_history("not-a-coin", Currency::Eur, Period::D1)
            .is_err()
    );
}
