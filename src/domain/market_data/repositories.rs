use crate::domain::errors::FetchResult;
use crate::domain::market_data::{FetchParams, PricePoint};

/// Source of historical candles.
///
/// One call is one outbound request; implementations must not retry or cache.
#[allow(async_fn_in_trait)]
pub trait PriceHistoryRepository {
    async fn fetch_price_history(
        &self,
        params: &FetchParams,
        cache_buster_ms: u64,
    ) -> FetchResult<Vec<PricePoint>>;
}
