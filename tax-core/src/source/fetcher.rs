use async_trait::async_trait;
use thiserror::Error;

use crate::models::{StructuredApiError, TaxBracket};

/// Failure modes of a bracket lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The upstream could not be reached (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status and a
    /// machine-readable error body holding at least one entry.
    #[error("Upstream returned structured errors: {0}")]
    StructuredUpstream(StructuredApiError),

    /// The upstream answered with a non-success status and a body that is
    /// not a structured error.
    #[error("API error with status {status}: {body}")]
    UnstructuredUpstream { status: u16, body: String },

    /// The upstream answered with success but the body is not a bracket list.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// The upstream's structured payload, when there is one to forward.
    pub fn structured(&self) -> Option<&StructuredApiError> {
        match self {
            Self::StructuredUpstream(payload) => Some(payload),
            Self::Transport(_) | Self::UnstructuredUpstream { .. } | Self::Decode(_) => None,
        }
    }
}

/// Source of marginal tax tables, keyed by tax year.
///
/// Implementations return the brackets exactly as the backing store reports
/// them; ordering and contiguity are checked by the calculator, not here.
#[async_trait]
pub trait BracketSource: Send + Sync {
    async fn fetch(&self, year: &str) -> Result<Vec<TaxBracket>, FetchError>;
}
