//! # Usage API Module
//!
//! One authenticated GET against the claude.ai usage endpoint, with the
//! result classified for rendering. No caching, no retries: the plugin
//! host drives the refresh cadence.

use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::config::Credentials;

const DEFAULT_BASE_URL: &str = "https://claude.ai";
const BASE_URL_ENV: &str = "CLAUDE_USAGE_BASE_URL";

// The usage endpoint is unofficial and rejects non-browser traffic, so
// the request must present a desktop-browser agent string.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One rolling quota window as reported by the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UsagePeriod {
    #[serde(default)]
    pub utilization: f64,
    #[serde(default)]
    pub resets_at: Option<String>,
}

/// The pair of windows for one run. Either side may be absent; both
/// absent means the endpoint had nothing to report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageSnapshot {
    #[serde(default)]
    pub five_hour: Option<UsagePeriod>,
    #[serde(default)]
    pub seven_day: Option<UsagePeriod>,
}

/// Classified result of the single fetch attempt.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Decoded successfully with at least one window present.
    Ok(UsageSnapshot),
    /// Connection, transport, or timeout failure.
    NetworkError,
    /// HTTP 401/403: the session cookie is expired or invalid.
    AuthError,
    /// Response body did not decode, or both windows were null.
    Unavailable,
}

/// Client for the usage endpoint. The base URL can be overridden through
/// `CLAUDE_USAGE_BASE_URL`, which the integration tests point at a local
/// stub listener.
pub struct UsageClient {
    agent: ureq::Agent,
    base_url: String,
}

impl UsageClient {
    pub fn new() -> Self {
        let base = env::var(BASE_URL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&base)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
        UsageClient {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, org_id: &str) -> String {
        format!("{}/api/organizations/{}/usage", self.base_url, org_id)
    }

    /// Issue the GET and classify what came back. Exactly one outbound
    /// call; every failure class maps to a terminal outcome.
    pub fn fetch(&self, creds: &Credentials) -> FetchOutcome {
        let result = self
            .agent
            .get(&self.endpoint(&creds.org_id))
            .set("Cookie", &format!("sessionKey={}", creds.session_key))
            .set("User-Agent", USER_AGENT)
            .set("Accept", "application/json")
            .call();

        let response = match result {
            Ok(resp) => resp,
            Err(ureq::Error::Status(401 | 403, _)) => return FetchOutcome::AuthError,
            // Other error statuses still carry a body; classification
            // falls to whether it decodes.
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(_) => return FetchOutcome::NetworkError,
        };

        let body = match response.into_string() {
            Ok(body) => body,
            Err(_) => return FetchOutcome::NetworkError,
        };

        let snapshot: UsageSnapshot = match serde_json::from_str(&body) {
            Ok(snapshot) => snapshot,
            Err(_) => return FetchOutcome::Unavailable,
        };

        if snapshot.five_hour.is_none() && snapshot.seven_day.is_none() {
            return FetchOutcome::Unavailable;
        }

        FetchOutcome::Ok(snapshot)
    }
}

impl Default for UsageClient {
    fn default() -> Self {
        Self::new()
    }
}
