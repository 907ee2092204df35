//! Shared HTTP client construction policy.
//!
//! Centralizes networking defaults so the resolver and the generator stay
//! consistent on timeouts, user-agent, compression, and redirect policy.

use std::time::Duration;

use reqwest::Client;
use reqwest::redirect::Policy;

/// Default connect timeout in seconds.
pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default read timeout in seconds.
pub(crate) const READ_TIMEOUT_SECS: u64 = 30;
/// Default redirect cap for resolution.
pub(crate) const MAX_REDIRECTS: usize = 10;

/// User-Agent sent on all outgoing requests.
pub(crate) const USER_AGENT: &str = concat!("quick-launch/", env!("CARGO_PKG_VERSION"));

/// Builds an HTTP client using shared project policy.
///
/// `max_redirects` caps transparent redirect following; exceeding the cap
/// surfaces as a request error on `send()`, which callers treat per their
/// own failure contract (the resolver falls back, the generator aborts).
///
/// # Panics
///
/// Panics if the HTTP client builder fails to build with the supplied
/// configuration. This should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub(crate) fn build_client(
    connect_timeout_secs: u64,
    read_timeout_secs: u64,
    max_redirects: usize,
) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(read_timeout_secs))
        .redirect(Policy::limited(max_redirects))
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()
        .expect("failed to build HTTP client with static configuration")
}
