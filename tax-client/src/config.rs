use std::time::Duration;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Upper bound on a single upstream call, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`HttpBracketFetcher`](crate::HttpBracketFetcher).
///
/// | field      | meaning                                             |
/// |------------|-----------------------------------------------------|
/// | `base_url` | scheme, host and port of the upstream tax API       |
/// | `timeout`  | whole-request timeout applied to every bracket call |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
