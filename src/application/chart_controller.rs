use crate::domain::events::{FetchTicket, ViewEvent};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    FetchParams, PriceHistoryRepository, PriceSeries, TimeRange, TradingPair,
};
use crate::domain::state::ViewState;
use crate::{log_error, log_info};

/// Drives the chart: selection -> fetch parameters -> provider -> view event.
///
/// Holds no view state itself; callers keep the current [`ViewState`]
/// snapshot and feed every returned event back through [`ViewState::update`].
pub struct ChartController<R: PriceHistoryRepository> {
    repository: R,
    pair: TradingPair,
}

impl<R: PriceHistoryRepository> ChartController<R> {
    pub fn new(repository: R, pair: TradingPair) -> Self {
        Self { repository, pair }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Apply a user selection. Returns the next snapshot and, when the
    /// selection actually changed, the ticket of the fetch to start.
    pub fn select(&self, state: &ViewState, range: TimeRange) -> (ViewState, Option<FetchTicket>) {
        let next = state.update(ViewEvent::RangeSelected { range });
        let ticket = if next.generation != state.generation { next.pending_ticket() } else { None };
        (next, ticket)
    }

    pub fn plan(&self, ticket: &FetchTicket, now_ms: u64) -> FetchParams {
        ticket.range.fetch_params(&self.pair, now_ms / 1000)
    }

    /// Run the single request for `ticket`. Never fails: errors come back
    /// as [`ViewEvent::FetchFailed`] after being logged.
    pub async fn load(&self, ticket: FetchTicket, now_ms: u64) -> ViewEvent {
        let params = self.plan(&ticket, now_ms);
        log_info!(
            LogComponent::Application("ChartController"),
            "Fetching {} ({} candles since {})",
            ticket.range.label(),
            params.interval,
            params.since_secs
        );

        match self.repository.fetch_price_history(&params, now_ms).await {
            Ok(points) => ViewEvent::FetchSucceeded { ticket, series: PriceSeries::new(points) },
            Err(error) => {
                log_error!(
                    LogComponent::Application("ChartController"),
                    "Error fetching data [{}]: {}",
                    error.kind(),
                    error
                );
                ViewEvent::FetchFailed { ticket, error }
            }
        }
    }
}
