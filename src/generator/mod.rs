//! Artifact generation for a resolved target.
//!
//! The generator consumes a [`RawRequest`] and a resolved identity as plain
//! data and produces the complete artifact set in a freshly computed output
//! directory: a typed manifest, a rendered click handler, the options page
//! and script, and one icon file per configured size fetched from the
//! favicon service.
//!
//! Writes are non-transactional. Steps run in a fixed order (directory,
//! manifest, scripts, icons) and the first unrecoverable failure aborts the
//! run, leaving partial output in place; reruns overwrite in place.

mod error;
mod icons;
mod manifest;
mod templates;

pub use error::GenerateError;
pub use icons::{IconPayload, IconVariant, icon_filename};
pub use manifest::{Background, BrowserAction, Manifest, OptionsUi};
pub use templates::{
    CLICK_HANDLER_FILE, DEFAULT_URL_TOKEN, OPTIONS_PAGE_FILE, OPTIONS_SCRIPT_FILE, TemplateSet,
};

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use url::Url;

use crate::http;
use crate::resolver::ResolvedIdentity;
use crate::sanitize::sanitize;

/// Production favicon service endpoint.
pub const DEFAULT_FAVICON_ENDPOINT: &str = "https://www.google.com/s2/favicons";

/// Manifest filename inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Prefix for every generated output directory.
const DIR_PREFIX: &str = "quick-launch-";

/// Immutable generation input.
#[derive(Debug, Clone)]
pub struct RawRequest {
    /// Target URL, embedded verbatim as the functional default.
    pub url: String,
    /// Free-text naming suffix; never affects behavior.
    pub suffix: Option<String>,
}

impl RawRequest {
    /// Validates the input URL and builds a request.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidUrl`] when `url` is not an absolute
    /// URL with a host component.
    pub fn new(url: impl Into<String>, suffix: Option<String>) -> Result<Self, GenerateError> {
        let url = url.into();
        let parsed = Url::parse(&url).map_err(|_| GenerateError::invalid_url(&url))?;
        if parsed.host_str().is_none() {
            return Err(GenerateError::invalid_url(&url));
        }
        Ok(Self { url, suffix })
    }
}

/// Configuration for [`Generator`] construction.
///
/// The templates root and favicon endpoint are explicit values, not derived
/// from module location or hardwired, so both external collaborators are
/// injectable.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding the static template files.
    pub templates_root: PathBuf,
    /// Directory under which the output directory is created.
    pub output_root: PathBuf,
    /// Favicon service endpoint, templated with `domain` and `sz` params.
    pub favicon_endpoint: String,
    /// Which icon sizes to fetch and reference.
    pub variant: IconVariant,
    /// Connect timeout in seconds for icon fetches.
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds for icon fetches.
    pub read_timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            templates_root: PathBuf::from("templates"),
            output_root: PathBuf::from("."),
            favicon_endpoint: DEFAULT_FAVICON_ENDPOINT.to_string(),
            variant: IconVariant::default(),
            connect_timeout_secs: http::CONNECT_TIMEOUT_SECS,
            read_timeout_secs: http::READ_TIMEOUT_SECS,
        }
    }
}

/// Computes the output directory name for a title and optional suffix.
///
/// Pure function of its inputs: `quick-launch-<sanitized-title>` with
/// `-<sanitized-suffix>` appended when a non-empty suffix was supplied.
#[must_use]
pub fn output_dir_name(display_title: &str, suffix: Option<&str>) -> String {
    let mut name = format!("{DIR_PREFIX}{}", sanitize(display_title));
    if let Some(suffix) = suffix
        && !suffix.is_empty()
    {
        name.push('-');
        name.push_str(&sanitize(suffix));
    }
    name
}

/// Generates extension packages from resolved identities.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    client: reqwest::Client,
}

impl Generator {
    /// Creates a generator with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the supplied
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let client = http::build_client(
            config.connect_timeout_secs,
            config.read_timeout_secs,
            http::MAX_REDIRECTS,
        );
        Self { config, client }
    }

    /// Produces the complete artifact set for `raw` and `identity`.
    ///
    /// Returns the output directory path on success. An already-existing
    /// output directory is reused silently; last writer wins.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] on the first unrecoverable sub-step:
    /// template read failure, any write failure, or any non-success or
    /// transport error on an icon fetch. Already-written files stay.
    #[tracing::instrument(skip(self, raw, identity), fields(hostname = %identity.hostname))]
    pub async fn generate(
        &self,
        raw: &RawRequest,
        identity: &ResolvedIdentity,
    ) -> Result<PathBuf, GenerateError> {
        let dir_name = output_dir_name(&identity.display_title, raw.suffix.as_deref());
        let dir = self.config.output_root.join(&dir_name);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| GenerateError::io(&dir, source))?;
        debug!(dir = %dir.display(), "output directory ready");

        let templates = TemplateSet::load(&self.config.templates_root).await?;
        let sizes = self.config.variant.sizes();

        let manifest = Manifest::build(
            &identity.display_title,
            raw.suffix.as_deref(),
            &raw.url,
            sizes,
        );
        let manifest_json = manifest
            .to_json()
            .map_err(|source| GenerateError::Manifest { source })?;
        write_artifact(&dir, MANIFEST_FILE, &manifest_json).await?;

        // The raw input URL is the functional default, never the resolved
        // hostname; resolution only drives naming and favicon requests.
        let click_handler = templates.render_click_handler(&raw.url);
        write_artifact(&dir, CLICK_HANDLER_FILE, click_handler.as_bytes()).await?;
        write_artifact(&dir, OPTIONS_PAGE_FILE, templates.options_page().as_bytes()).await?;
        write_artifact(&dir, OPTIONS_SCRIPT_FILE, templates.options_script().as_bytes()).await?;

        let payloads = icons::fetch_all(
            &self.client,
            &self.config.favicon_endpoint,
            &identity.hostname,
            sizes,
        )
        .await?;
        for payload in payloads {
            write_artifact(&dir, &icon_filename(payload.size), &payload.bytes).await?;
        }

        info!(path = %dir.display(), "generated extension package");
        Ok(dir)
    }
}

async fn write_artifact(dir: &Path, name: &str, bytes: &[u8]) -> Result<(), GenerateError> {
    let path = dir.join(name);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| GenerateError::io(path.clone(), source))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote artifact");
    Ok(())
}
