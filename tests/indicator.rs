use bitcoin_tracker_wasm::domain::market_data::{
    Indicator, OHLC, Price, PricePoint, PriceSeries, Timestamp, Trend,
};

fn series(closes: &[f64]) -> PriceSeries {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            let price = Price::new(*close);
            PricePoint::new(
                Timestamp::from_unix_seconds(i as u64 * 86_400),
                OHLC::new(price, price, price, price),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn rise_from_100_to_150_is_fifty_percent() {
    let indicator = Indicator::from_series(&series(&[100.0, 120.0, 90.0, 150.0]));
    assert_eq!(indicator, Indicator::Present(50.0));
    assert_eq!(indicator.trend(), Some(Trend::Up));
}

#[test]
fn fall_from_100_to_80_is_minus_twenty_percent() {
    let indicator = Indicator::from_series(&series(&[100.0, 95.0, 80.0]));
    assert_eq!(indicator, Indicator::Present(-20.0));
    assert_eq!(indicator.trend(), Some(Trend::Down));
}

#[test]
fn empty_series_is_absent() {
    let indicator = Indicator::from_series(&PriceSeries::empty());
    assert_eq!(indicator, Indicator::Absent);
    assert_eq!(indicator.value(), None);
    assert_eq!(indicator.trend(), None);
}

#[test]
fn zero_first_close_is_absent_instead_of_infinite() {
    assert_eq!(Indicator::from_series(&series(&[0.0, 10.0])), Indicator::Absent);
}

#[test]
fn single_candle_is_flat() {
    let indicator = Indicator::from_series(&series(&[42_000.0]));
    assert_eq!(indicator, Indicator::Present(0.0));
    assert_eq!(indicator.trend(), Some(Trend::Up));
}
