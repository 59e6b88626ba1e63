//! HTTP-backed [`BracketSource`](tax_core::BracketSource) for the upstream
//! tax-bracket API.

mod config;
mod fetcher;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FetcherConfig};
pub use fetcher::HttpBracketFetcher;
