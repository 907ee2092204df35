//! Static template loading and click-handler rendering.
//!
//! Templates are opaque text blobs read from an explicitly injected root
//! directory. The click handler has exactly one substitution point, the
//! `{{DEFAULT_URL}}` token, which receives the original unresolved input
//! URL; the options page and options script are copied verbatim.

use std::path::Path;

use super::error::GenerateError;

/// Substitution token in the click-handler template.
pub const DEFAULT_URL_TOKEN: &str = "{{DEFAULT_URL}}";

/// Click-handler script filename (template and output share the name).
pub const CLICK_HANDLER_FILE: &str = "background.js";
/// Options page markup filename.
pub const OPTIONS_PAGE_FILE: &str = "options.html";
/// Options page script filename.
pub const OPTIONS_SCRIPT_FILE: &str = "options.js";

/// The three template bodies, loaded once per generation.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    click_handler: String,
    options_page: String,
    options_script: String,
}

impl TemplateSet {
    /// Loads all template bodies from `root`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] naming the file that failed.
    pub async fn load(root: &Path) -> Result<Self, GenerateError> {
        Ok(Self {
            click_handler: read_template(root, CLICK_HANDLER_FILE).await?,
            options_page: read_template(root, OPTIONS_PAGE_FILE).await?,
            options_script: read_template(root, OPTIONS_SCRIPT_FILE).await?,
        })
    }

    /// Renders the click handler with `default_url` substituted for the
    /// [`DEFAULT_URL_TOKEN`] placeholder.
    #[must_use]
    pub fn render_click_handler(&self, default_url: &str) -> String {
        self.click_handler.replace(DEFAULT_URL_TOKEN, default_url)
    }

    /// Options page markup, verbatim.
    #[must_use]
    pub fn options_page(&self) -> &str {
        &self.options_page
    }

    /// Options page script, verbatim.
    #[must_use]
    pub fn options_script(&self) -> &str {
        &self.options_script
    }
}

async fn read_template(root: &Path, name: &str) -> Result<String, GenerateError> {
    let path = root.join(name);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| GenerateError::template(path, source))
}
