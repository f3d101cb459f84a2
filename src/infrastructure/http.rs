//! HTTP access to the exchange.

pub mod dto;
pub mod kraken_rest_client;

pub use dto::KrakenOhlcResponse;
pub use kraken_rest_client::{KrakenConfig, KrakenRestClient};
