use bitcoin_tracker_wasm::domain::errors::FetchError;
use bitcoin_tracker_wasm::domain::market_data::TradingPair;
use bitcoin_tracker_wasm::infrastructure::http::KrakenOhlcResponse;
use serde_json::json;

fn body(candles: serde_json::Value) -> String {
    json!({ "error": [], "result": { "XXBTZUSD": candles, "last": 1700028800 } }).to_string()
}

fn normalize(body: &str) -> Result<Vec<bitcoin_tracker_wasm::domain::market_data::PricePoint>, FetchError> {
    KrakenOhlcResponse::from_body(body)?.into_price_points(&TradingPair::btc_usd())
}

#[test]
fn every_candle_becomes_a_point_in_order() {
    let body = body(json!([
        [1700000000, "37000.1", "37500.0", "36800.5", "37250.3", "37100.0", "12.5", 1000],
        [1700014400, "37250.3", "37600.0", "37100.0", "37580.9", "37400.0", "8.1", 800],
        [1700028800, "37580.9", "37700.0", "37000.0", "37010.0", "37300.0", "9.9", 900]
    ]));

    let points = normalize(&body).unwrap();

    assert_eq!(points.len(), 3);
    let stamps: Vec<u64> = points.iter().map(|p| p.timestamp.value()).collect();
    assert_eq!(stamps, vec![1_700_000_000_000, 1_700_014_400_000, 1_700_028_800_000]);

    let first = points[0].ohlc;
    assert_eq!(first.open.value(), 37000.1);
    assert_eq!(first.high.value(), 37500.0);
    assert_eq!(first.low.value(), 36800.5);
    assert_eq!(first.close.value(), 37250.3);
    assert_eq!(points[2].close().value(), 37010.0);
}

#[test]
fn only_the_first_five_fields_are_required() {
    let points = normalize(&body(json!([[1700000000, "1.5", "2", "1", "1.75"]]))).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].close().value(), 1.75);
}

#[test]
fn order_is_kept_as_returned() {
    let points =
        normalize(&body(json!([[20, "1", "1", "1", "1"], [10, "2", "2", "2", "2"]]))).unwrap();
    assert_eq!(points[0].timestamp.value(), 20_000);
    assert_eq!(points[1].timestamp.value(), 10_000);
}

#[test]
fn empty_candle_list_is_not_an_error() {
    assert!(normalize(&body(json!([]))).unwrap().is_empty());
}

#[test]
fn provider_error_fails_the_fetch() {
    let body = json!({ "error": ["EQuery:Unknown asset pair"] }).to_string();
    assert_eq!(
        normalize(&body).unwrap_err(),
        FetchError::Provider("EQuery:Unknown asset pair".to_string())
    );
}

#[test]
fn missing_result_and_missing_pair_are_distinct() {
    let no_result = json!({ "error": [] }).to_string();
    assert_eq!(normalize(&no_result).unwrap_err(), FetchError::MissingResult);

    let other_pair = json!({ "error": [], "result": { "XETHZUSD": [], "last": 0 } }).to_string();
    assert_eq!(
        normalize(&other_pair).unwrap_err(),
        FetchError::MissingPair("XXBTZUSD".to_string())
    );
}

#[test]
fn one_bad_candle_rejects_the_whole_response() {
    let body = body(json!([
        [1700000000, "1", "1", "1", "1"],
        [1700014400, "1", "1", "1"]
    ]));
    assert_eq!(
        normalize(&body).unwrap_err(),
        FetchError::MalformedCandle { index: 1, reason: "expected 5 fields, got 4".to_string() }
    );

    let bad_time = self::body(json!([["soon", "1", "1", "1", "1"]]));
    assert!(matches!(
        normalize(&bad_time).unwrap_err(),
        FetchError::MalformedCandle { index: 0, .. }
    ));
}

#[test]
fn garbage_body_is_invalid_json() {
    assert!(matches!(normalize("<html>").unwrap_err(), FetchError::InvalidJson(_)));
}
