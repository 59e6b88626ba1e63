use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

/// Machine-readable error body returned by the upstream tax API.
///
/// The same shape is forwarded verbatim to callers of this service, so it
/// serves both as a transport payload and as an error value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredApiError {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

impl StructuredApiError {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for StructuredApiError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{} upstream error(s)", self.errors.len()),
        }
    }
}

impl std::error::Error for StructuredApiError {}
