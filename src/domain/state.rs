use crate::domain::events::{DomainEvent, FetchTicket, ViewEvent};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Indicator, Price, PriceSeries, TimeRange};
use crate::{log_debug, log_warn};

/// Immutable snapshot handed to the view on every change.
///
/// Never mutated in place: [`ViewState::update`] is the single transition
/// function and returns the next snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub selection: TimeRange,
    pub series: PriceSeries,
    pub indicator: Indicator,
    pub loading: bool,
    /// Number of selections that started a fetch so far.
    pub generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selection: TimeRange::default(),
            series: PriceSeries::empty(),
            indicator: Indicator::Absent,
            loading: false,
            generation: 0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for the fetch the current generation expects, if one is running.
    pub fn pending_ticket(&self) -> Option<FetchTicket> {
        (self.loading && self.generation > 0)
            .then_some(FetchTicket { generation: self.generation, range: self.selection })
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && ticket.range == self.selection
    }

    pub fn latest_price(&self) -> Option<Price> {
        self.series.latest_close()
    }

    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }

    pub fn update(&self, event: ViewEvent) -> ViewState {
        log_debug!(
            LogComponent::Domain("ViewState"),
            "{} (generation {})",
            event.event_type(),
            self.generation
        );

        if let Some(ticket) = event.ticket() {
            if !self.is_current(&ticket) {
                self.discard(&ticket);
                return self.clone();
            }
        }

        match event {
            ViewEvent::RangeSelected { range } => {
                // Selecting the active range again is not a state change.
                if self.generation > 0 && range == self.selection {
                    return self.clone();
                }
                ViewState {
                    selection: range,
                    loading: true,
                    generation: self.generation + 1,
                    ..self.clone()
                }
            }
            ViewEvent::FetchSucceeded { series, .. } => {
                let indicator = Indicator::from_series(&series);
                ViewState { series, indicator, loading: false, ..self.clone() }
            }
            ViewEvent::FetchFailed { .. } => ViewState { loading: false, ..self.clone() },
        }
    }

    fn discard(&self, ticket: &FetchTicket) {
        log_warn!(
            LogComponent::Domain("ViewState"),
            "Discarding stale result for {} (generation {}, current {})",
            ticket.range.label(),
            ticket.generation,
            self.generation
        );
    }
}
