use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;

use crate::core::Result;
use crate::core::constants::{http_status, timeouts};
use crate::ui::logging;

/// Classifies a single URL as reachable or not.
///
/// Implementations must never fail: any error is reported as `false`.
#[async_trait]
pub trait VerifyUrl: Send + Sync {
    async fn verify(&self, url: &str) -> bool;
}

/// Settings shared by every probe of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierOptions {
    /// Hard limit for a single probe
    pub timeout: Duration,
    pub follow_redirects: bool,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl Default for VerifierOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(timeouts::DEFAULT_TIMEOUT_SECONDS),
            follow_redirects: true,
            user_agent: None,
        }
    }
}

/// Probes URLs with a single HEAD request each.
#[derive(Debug, Clone)]
pub struct HttpVerifier {
    client: reqwest::Client,
}

impl HttpVerifier {
    /// Build the HTTP client used by every probe of this verifier.
    pub fn new(options: &VerifierOptions) -> Result<Self> {
        let redirect_policy = if options.follow_redirects {
            Policy::limited(http_status::MAX_REDIRECTS)
        } else {
            Policy::none()
        };
        let user_agent = options.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .redirect(redirect_policy)
            .user_agent(user_agent)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }

    /// Whether a final status code counts as reachable (2xx and 3xx).
    pub fn is_reachable_status(status: u16) -> bool {
        (http_status::REACHABLE_MIN..http_status::REACHABLE_END).contains(&status)
    }
}

#[async_trait]
impl VerifyUrl for HttpVerifier {
    async fn verify(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                logging::log_probe_result(url, Some(status), None);
                Self::is_reachable_status(status)
            }
            Err(err) => {
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                logging::log_probe_result(url, None, Some(&description));
                false
            }
        }
    }
}
