use bitcoin_tracker_wasm::domain::market_data::{
    CandleInterval, SECONDS_PER_DAY, TimeRange, TradingPair,
};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

const NOW: u64 = 1_700_000_000;

fn expected(range: TimeRange) -> (CandleInterval, u64) {
    match range {
        TimeRange::OneMonth => (CandleInterval::FourHours, 30),
        TimeRange::OneYear => (CandleInterval::OneDay, 365),
        TimeRange::TwoYears => (CandleInterval::OneDay, 730),
        TimeRange::ThreeYears => (CandleInterval::OneDay, 1095),
    }
}

#[test]
fn every_range_maps_to_its_table_entry() {
    let pair = TradingPair::btc_usd();
    for range in TimeRange::iter() {
        let (interval, days) = expected(range);
        let params = range.fetch_params(&pair, NOW);
        assert_eq!(params.interval, interval, "{range:?}");
        assert_eq!(params.lookback_days, days, "{range:?}");
        assert_eq!(params.since_secs, NOW - days * SECONDS_PER_DAY, "{range:?}");
        assert_eq!(params.pair, pair);
    }
}

#[test]
fn one_month_uses_four_hour_candles_and_others_daily() {
    assert_eq!(TimeRange::OneMonth.interval().minutes(), 240);
    for range in [TimeRange::OneYear, TimeRange::TwoYears, TimeRange::ThreeYears] {
        assert_eq!(range.interval().minutes(), 1440);
    }
}

#[test]
fn labels_and_tokens_match_the_buttons() {
    let labels: Vec<_> = TimeRange::iter().map(|r| (r.token().to_string(), r.label())).collect();
    assert_eq!(
        labels,
        vec![
            ("1m".to_string(), "1 Month"),
            ("1y".to_string(), "1 Year"),
            ("2y".to_string(), "2 Years"),
            ("3y".to_string(), "3 Years"),
        ]
    );
    assert_eq!(TimeRange::default(), TimeRange::OneMonth);
}

#[quickcheck]
fn mapping_depends_only_on_range_and_now(offset: u32) -> bool {
    let now = NOW + offset as u64;
    let pair = TradingPair::btc_usd();
    TimeRange::iter().all(|range| {
        let first = range.fetch_params(&pair, now);
        let second = range.fetch_params(&pair, now);
        let (interval, days) = expected(range);
        first == second && first.interval == interval && now - first.since_secs == days * SECONDS_PER_DAY
    })
}
