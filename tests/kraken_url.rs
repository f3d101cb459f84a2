use bitcoin_tracker_wasm::domain::market_data::{TimeRange, TradingPair};
use bitcoin_tracker_wasm::infrastructure::http::{KrakenConfig, KrakenRestClient};

const NOW_SECS: u64 = 1_700_000_000;
const NOW_MS: u64 = 1_700_000_000_123;

fn url(range: TimeRange) -> String {
    let client = KrakenRestClient::default();
    let params = range.fetch_params(&TradingPair::btc_usd(), NOW_SECS);
    client.ohlc_url(&params, NOW_MS)
}

#[test]
fn one_month_url() {
    insta::assert_snapshot!(
        url(TimeRange::OneMonth),
        @"https://api.kraken.com/0/public/OHLC?pair=XBTUSD&interval=240&since=1697408000&_=1700000000123"
    );
}

#[test]
fn one_year_url() {
    insta::assert_snapshot!(
        url(TimeRange::OneYear),
        @"https://api.kraken.com/0/public/OHLC?pair=XBTUSD&interval=1440&since=1668464000&_=1700000000123"
    );
}

#[test]
fn three_year_url() {
    insta::assert_snapshot!(
        url(TimeRange::ThreeYears),
        @"https://api.kraken.com/0/public/OHLC?pair=XBTUSD&interval=1440&since=1605392000&_=1700000000123"
    );
}

#[test]
fn trailing_slash_in_base_url_is_ignored() {
    let client = KrakenRestClient::new(KrakenConfig {
        base_url: "http://localhost:8080/".to_string(),
        pair: TradingPair::new("ETHUSD", "XETHZUSD"),
    });
    let params = TimeRange::TwoYears.fetch_params(&client.config().pair, NOW_SECS);
    assert_eq!(
        client.ohlc_url(&params, 1),
        "http://localhost:8080/0/public/OHLC?pair=ETHUSD&interval=1440&since=1636928000&_=1"
    );
}
