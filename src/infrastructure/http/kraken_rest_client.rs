use super::dto::KrakenOhlcResponse;
use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{FetchParams, PriceHistoryRepository, PricePoint, TradingPair};
use crate::{log_debug, log_info};
use gloo::net::http::Request;

/// Where the client points. Defaults to Kraken's public API and BTC/USD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KrakenConfig {
    pub base_url: String,
    pub pair: TradingPair,
}

impl Default for KrakenConfig {
    fn default() -> Self {
        Self { base_url: "https://api.kraken.com".to_string(), pair: TradingPair::btc_usd() }
    }
}

/// Simple REST client for Kraken's public OHLC endpoint
#[derive(Debug, Clone, Default)]
pub struct KrakenRestClient {
    config: KrakenConfig,
}

impl KrakenRestClient {
    pub fn new(config: KrakenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KrakenConfig {
        &self.config
    }

    /// `_` is a cache buster so the browser never serves a stale response.
    pub fn ohlc_url(&self, params: &FetchParams, cache_buster_ms: u64) -> String {
        format!(
            "{}/0/public/OHLC?pair={}&interval={}&since={}&_={}",
            self.config.base_url.trim_end_matches('/'),
            params.pair.query,
            params.interval.to_kraken_str(),
            params.since_secs,
            cache_buster_ms
        )
    }

    async fn get_body(&self, url: &str) -> FetchResult<String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{e:?}")))?;

        if !response.ok() {
            return Err(FetchError::HttpStatus {
                status: response.status(),
                text: response.status_text(),
            });
        }

        response.text().await.map_err(|e| FetchError::Network(format!("{e:?}")))
    }
}

impl PriceHistoryRepository for KrakenRestClient {
    async fn fetch_price_history(
        &self,
        params: &FetchParams,
        cache_buster_ms: u64,
    ) -> FetchResult<Vec<PricePoint>> {
        let url = self.ohlc_url(params, cache_buster_ms);
        log_debug!(LogComponent::Infrastructure("KrakenAPI"), "GET {}", url);

        let body = self.get_body(&url).await?;
        let points = KrakenOhlcResponse::from_body(&body)?.into_price_points(&params.pair)?;

        log_info!(
            LogComponent::Infrastructure("KrakenAPI"),
            "Loaded {} candles ({} interval, {} days)",
            points.len(),
            params.interval,
            params.lookback_days
        );
        Ok(points)
    }
}
