use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tax_core::{CalculationError, FetchError};
use thiserror::Error;
use tracing::{error, warn};

use crate::validation::ValidationError;

/// Body returned for every failure that does not forward an upstream payload.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Every way a request handler can fail.
///
/// The status mapping is:
///
/// | variant                                   | status | body                          |
/// |-------------------------------------------|--------|-------------------------------|
/// | `Validation`                              | 400    | `{"error": <message>}`        |
/// | `Fetch(StructuredUpstream)` (either path) | 502    | upstream payload, verbatim    |
/// | anything else                             | 500    | `{"error": <generic message>}`|
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

fn fetch_error_response(err: FetchError) -> Response {
    match err {
        FetchError::StructuredUpstream(payload) => {
            warn!(errors = %payload, "forwarding structured upstream error");
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
        FetchError::UnstructuredUpstream { status, ref body } => {
            error!(status, body = %body, "upstream failed without a structured error");
            internal_error()
        }
        FetchError::Transport(ref cause) => {
            error!(cause = %cause, "upstream unreachable");
            internal_error()
        }
        FetchError::Decode(ref cause) => {
            error!(cause = %cause, "upstream returned an undecodable bracket table");
            internal_error()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                warn!(error = %err, "rejected request");
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(err.to_string()))).into_response()
            }
            Self::Fetch(err) | Self::Calculation(CalculationError::Fetch(err)) => {
                fetch_error_response(err)
            }
            Self::Calculation(
                err @ (CalculationError::NoBrackets(_)
                | CalculationError::InvalidBrackets { .. }
                | CalculationError::NegativeIncome(_)),
            ) => {
                error!(error = %err, "tax calculation failed");
                internal_error()
            }
        }
    }
}
