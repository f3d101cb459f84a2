use crate::domain::errors::FetchError;
use crate::domain::market_data::{PriceSeries, TimeRange};
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// Identifies which selection a fetch was started for.
///
/// `generation` grows by one with every accepted selection; a completion
/// whose generation is not the current one is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub range: TimeRange,
}

/// The only inputs that can change the view state.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    RangeSelected { range: TimeRange },
    FetchSucceeded { ticket: FetchTicket, series: PriceSeries },
    FetchFailed { ticket: FetchTicket, error: FetchError },
}

impl DomainEvent for ViewEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ViewEvent::RangeSelected { .. } => "RangeSelected",
            ViewEvent::FetchSucceeded { .. } => "FetchSucceeded",
            ViewEvent::FetchFailed { .. } => "FetchFailed",
        }
    }
}

impl ViewEvent {
    /// Ticket of a completion event, `None` for user input.
    pub fn ticket(&self) -> Option<FetchTicket> {
        match self {
            ViewEvent::RangeSelected { .. } => None,
            ViewEvent::FetchSucceeded { ticket, .. } | ViewEvent::FetchFailed { ticket, .. } => {
                Some(*ticket)
            }
        }
    }
}
