use async_trait::async_trait;
use reqwest::Client;
use tax_core::{BracketSource, FetchError, StructuredApiError, TaxBracket, TaxBracketsResponse};
use tracing::{debug, error, info};

use crate::config::FetcherConfig;

/// Fetches bracket tables from `<base_url>/tax-calculator/tax-year/<year>`.
///
/// One outbound request per call, no retries. Dropping the returned future
/// abandons the request.
#[derive(Debug, Clone)]
pub struct HttpBracketFetcher {
    base_url: String,
    client: Client,
}

impl HttpBracketFetcher {
    /// Build a fetcher with its own connection pool.
    ///
    /// # Errors
    /// [`FetchError::Transport`] if the underlying HTTP client cannot be
    /// constructed (for example, no TLS backend is available).
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| FetchError::Transport(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn year_url(
        &self,
        year: &str,
    ) -> String {
        format!("{}/tax-calculator/tax-year/{year}", self.base_url)
    }
}

/// Sorts a non-success response into structured or unstructured.
///
/// A body only counts as structured when it parses as an error list with at
/// least one entry.
fn classify_error_body(
    status: u16,
    body: String,
) -> FetchError {
    match serde_json::from_str::<StructuredApiError>(&body) {
        Ok(payload) if !payload.is_empty() => FetchError::StructuredUpstream(payload),
        _ => FetchError::UnstructuredUpstream { status, body },
    }
}

#[async_trait]
impl BracketSource for HttpBracketFetcher {
    async fn fetch(
        &self,
        year: &str,
    ) -> Result<Vec<TaxBracket>, FetchError> {
        let url = self.year_url(year);
        debug!(%url, "fetching tax brackets");

        let response = self.client.get(&url).send().await.map_err(|err| {
            error!(year, error = %err, "error fetching tax brackets");
            FetchError::Transport(err.to_string())
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    error!(
                        year,
                        status = status.as_u16(),
                        error = %err,
                        "upstream returned an error but its body could not be read"
                    );
                    return Err(FetchError::UnstructuredUpstream {
                        status: status.as_u16(),
                        body: format!("<unreadable response body: {err}>"),
                    });
                }
            };

            let err = classify_error_body(status.as_u16(), body);
            match &err {
                FetchError::StructuredUpstream(payload) => {
                    error!(year, status = status.as_u16(), errors = %payload, "upstream returned structured errors");
                }
                FetchError::UnstructuredUpstream { body, .. } => {
                    error!(year, status = status.as_u16(), body = %body, "upstream returned an unparseable error response");
                }
                FetchError::Transport(_) | FetchError::Decode(_) => {}
            }
            return Err(err);
        }

        let body = response.text().await.map_err(|err| {
            error!(year, error = %err, "error reading tax bracket response");
            FetchError::Transport(err.to_string())
        })?;

        let parsed: TaxBracketsResponse = serde_json::from_str(&body).map_err(|err| {
            error!(year, error = %err, "error decoding tax bracket response");
            FetchError::Decode(err.to_string())
        })?;

        info!(
            year,
            count = parsed.tax_brackets.len(),
            "successfully fetched tax brackets"
        );

        Ok(parsed.tax_brackets)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fetcher(base_url: &str) -> HttpBracketFetcher {
        HttpBracketFetcher::new(&FetcherConfig {
            base_url: base_url.to_string(),
            ..FetcherConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn year_url_appends_tax_year_path() {
        assert_eq!(
            fetcher("http://tax-api:5001").year_url("2022"),
            "http://tax-api:5001/tax-calculator/tax-year/2022"
        );
    }

    #[test]
    fn year_url_tolerates_trailing_slash() {
        assert_eq!(
            fetcher("http://tax-api:5001/").year_url("2019"),
            "http://tax-api:5001/tax-calculator/tax-year/2019"
        );
    }

    #[test]
    fn classify_structured_body() {
        let body = r#"{"errors":[{"code":"INVALID_YEAR","field":"year","message":"nope"}]}"#;

        let err = classify_error_body(400, body.to_string());

        assert!(matches!(err, FetchError::StructuredUpstream(ref p) if p.errors[0].code == "INVALID_YEAR"));
    }

    #[test]
    fn classify_empty_error_list_as_unstructured() {
        let err = classify_error_body(500, r#"{"errors":[]}"#.to_string());

        assert_eq!(
            err,
            FetchError::UnstructuredUpstream {
                status: 500,
                body: r#"{"errors":[]}"#.to_string(),
            }
        );
    }

    #[test]
    fn classify_plain_text_as_unstructured() {
        let err = classify_error_body(503, "Service Unavailable".to_string());

        assert_eq!(
            err.to_string(),
            "API error with status 503: Service Unavailable"
        );
    }
}
