//! URL resolution: redirect following to a canonical site identity.
//!
//! The resolver issues a single GET against the input URL, lets the HTTP
//! client follow redirects up to a configured cap, and derives the identity
//! (hostname + display title) from the final response URL. One special case
//! applies: when the final host is the known single-sign-on provider and a
//! `continue` query parameter carries an absolute URL, the identity comes
//! from that URL's host instead, so shortcuts point at the destination
//! service rather than the login gateway.
//!
//! Resolution never fails outward. Any transport error, redirect-cap
//! overflow, or host-less final URL degrades to an identity parsed from
//! the original input URL, logged as a warning.

use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::http;

/// Host gate for the identity-provider special case.
pub const DEFAULT_AUTH_HOST: &str = "accounts.google.com";

/// Canonical identity derived from resolution.
///
/// `display_title` always equals `hostname` in this system - no page-title
/// scraping occurs. Both fields exist because they serve different
/// consumers (directory naming vs. favicon requests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// Host of the final (or fallback) URL.
    pub hostname: String,
    /// Human-facing title; identical to `hostname`.
    pub display_title: String,
}

impl ResolvedIdentity {
    fn from_host(host: impl Into<String>) -> Self {
        let hostname = host.into();
        Self {
            display_title: hostname.clone(),
            hostname,
        }
    }
}

/// Configuration for [`Resolver`] construction.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Single-sign-on host that triggers the `continue`-parameter rule.
    pub auth_host: String,
    /// Maximum redirect hops before resolution falls back.
    pub max_redirects: usize,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds.
    pub read_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            auth_host: DEFAULT_AUTH_HOST.to_string(),
            max_redirects: http::MAX_REDIRECTS,
            connect_timeout_secs: http::CONNECT_TIMEOUT_SECS,
            read_timeout_secs: http::READ_TIMEOUT_SECS,
        }
    }
}

/// Internal resolution failure; never escapes [`Resolver::resolve`].
#[derive(Debug, Error)]
enum ResolveFailure {
    #[error("request failed: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("final URL {url} has no host component")]
    NoHost { url: String },
}

/// Resolves input URLs to a [`ResolvedIdentity`].
///
/// Create once and reuse; the underlying client pools connections.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ResolverConfig,
    client: reqwest::Client,
}

impl Resolver {
    /// Creates a resolver with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the supplied
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        let client = http::build_client(
            config.connect_timeout_secs,
            config.read_timeout_secs,
            config.max_redirects,
        );
        Self { config, client }
    }

    /// Resolves `url` to a canonical identity. Never fails outward.
    ///
    /// On any resolution failure the identity is derived from the input
    /// URL alone, with no redirect following and no special case; the
    /// failure is logged as a warning.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, url: &str) -> ResolvedIdentity {
        match self.follow(url).await {
            Ok(identity) => {
                debug!(hostname = %identity.hostname, "resolved identity");
                identity
            }
            Err(error) => {
                warn!(url = %url, error = %error, "resolution failed; using input URL host");
                Self::fallback_identity(url)
            }
        }
    }

    async fn follow(&self, url: &str) -> Result<ResolvedIdentity, ResolveFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ResolveFailure::Network { source })?;
        let final_url = response.url().clone();

        let host = final_url
            .host_str()
            .ok_or_else(|| ResolveFailure::NoHost {
                url: final_url.to_string(),
            })?
            .to_string();

        if host == self.config.auth_host
            && let Some(target_host) = continue_target_host(&final_url)
        {
            debug!(
                auth_host = %host,
                target = %target_host,
                "identity-provider redirect; using continue target host"
            );
            return Ok(ResolvedIdentity::from_host(target_host));
        }

        Ok(ResolvedIdentity::from_host(host))
    }

    /// Derives an identity from the raw input URL with no network access.
    ///
    /// Inputs are validated as absolute URLs at startup, so a host is
    /// normally present; a host-less input degrades to the input text
    /// itself rather than panicking.
    fn fallback_identity(url: &str) -> ResolvedIdentity {
        let host = Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(ToString::to_string))
            .unwrap_or_else(|| url.trim().to_string());
        ResolvedIdentity::from_host(host)
    }
}

/// Extracts the host of a well-formed absolute `continue` parameter, if any.
///
/// An unparseable `continue` value silently disables the special case.
fn continue_target_host(final_url: &Url) -> Option<String> {
    let value = final_url
        .query_pairs()
        .find(|(name, _)| name == "continue")
        .map(|(_, value)| value.into_owned())?;
    let target = Url::parse(&value).ok()?;
    target.host_str().map(ToString::to_string)
}
