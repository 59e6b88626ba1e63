use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tax_client::{DEFAULT_BASE_URL, FetcherConfig};

// ─── CLI / environment definition ───────────────────────────────────────────

/// Progressive income tax service.
///
/// Fetches marginal bracket tables from the upstream tax API and applies
/// them to an income. Every option can also be set through the environment
/// variable shown in its help.
#[derive(Debug, Clone, Parser)]
#[command(name = "tax-server", version, about, long_about = None)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces).
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the upstream tax-bracket API.
    #[arg(long, env = "TAX_API_URL", default_value = DEFAULT_BASE_URL)]
    pub tax_api_url: String,

    /// Timeout, in seconds, for each upstream bracket request.
    #[arg(long, env = "TAX_API_TIMEOUT_SECS", default_value_t = 10)]
    pub tax_api_timeout_secs: u64,

    /// Append log output to this file in addition to stdout.
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            base_url: self.tax_api_url.clone(),
            timeout: Duration::from_secs(self.tax_api_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        ServerConfig::try_parse_from(std::iter::once("tax-server").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let cfg = parse(&[
            "--port",
            "9090",
            "--tax-api-url",
            "http://tax-api:5001",
            "--tax-api-timeout-secs",
            "3",
        ]);

        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.tax_api_url, "http://tax-api:5001");
        assert_eq!(cfg.tax_api_timeout_secs, 3);
    }

    #[test]
    fn listen_addr_binds_all_interfaces() {
        let cfg = parse(&["--port", "8081"]);

        assert_eq!(cfg.listen_addr(), "0.0.0.0:8081".parse().unwrap());
    }

    #[test]
    fn fetcher_config_carries_url_and_timeout() {
        let cfg = parse(&[
            "--tax-api-url",
            "http://upstream:5001",
            "--tax-api-timeout-secs",
            "7",
        ]);

        assert_eq!(
            cfg.fetcher_config(),
            FetcherConfig {
                base_url: "http://upstream:5001".to_string(),
                timeout: Duration::from_secs(7),
            }
        );
    }

    #[test]
    fn rejects_non_numeric_port() {
        let result = ServerConfig::try_parse_from(["tax-server", "--port", "eighty"]);

        assert!(result.is_err());
    }
}
