//! API Layer
//!
//! HTTP client, error normalization and market data wire types.

pub mod client;
pub mod error;
pub mod market;

pub use client::{
    get_api_base, ApiClient, GlooTransport, HttpRequest, HttpResponse, Method,
    RequestOptions, Transport,
};
pub use error::ApiError;
pub use market::{market_data_options, to_ohlc_series, MarketData, MARKET_DATA_ENDPOINT};
