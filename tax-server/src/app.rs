use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tax_client::HttpBracketFetcher;
use tax_core::{FetchError, TaxCalculator};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers;

/// Shared, immutable per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub calculator: TaxCalculator,
}

/// Wire the upstream client and calculator from configuration.
///
/// # Errors
/// [`FetchError::Transport`] if the HTTP client cannot be built.
pub fn build_state(config: &ServerConfig) -> Result<AppState, FetchError> {
    let fetcher = HttpBracketFetcher::new(&config.fetcher_config())?;

    Ok(AppState {
        calculator: TaxCalculator::new(Arc::new(fetcher)),
    })
}

/// All routes, with request logging and permissive CORS.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/tax/calculate", post(handlers::calculate_tax))
        .route("/tax/brackets/{year}", get(handlers::get_tax_brackets))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
