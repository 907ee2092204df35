//! Typed extension-manifest record.
//!
//! The manifest schema is a first-class, checkable contract: named typed
//! fields rather than an open JSON map. Icon paths are derived through
//! [`icon_filename`] so the manifest and the written files cannot drift.

use std::collections::BTreeMap;

use serde::Serialize;

use super::icons::icon_filename;
use super::templates::{CLICK_HANDLER_FILE, OPTIONS_PAGE_FILE};

/// Manifest version emitted for generated packages.
const MANIFEST_VERSION: u8 = 2;
/// Extension version string; generation is stateless so this never bumps.
const EXTENSION_VERSION: &str = "1.0";

/// Top-level extension manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub manifest_version: u8,
    pub name: String,
    pub version: String,
    pub description: String,
    /// Size -> filename map; keys serialize as strings ("16": "icon16.png").
    pub icons: BTreeMap<u32, String>,
    pub browser_action: BrowserAction,
    pub background: Background,
    pub options_ui: OptionsUi,
    pub permissions: Vec<String>,
}

/// Toolbar click action descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct BrowserAction {
    pub default_icon: BTreeMap<u32, String>,
    pub default_title: String,
}

/// Background event-handler entry point.
#[derive(Debug, Clone, Serialize)]
pub struct Background {
    pub scripts: Vec<String>,
    pub persistent: bool,
}

/// Options UI entry point.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsUi {
    pub page: String,
    pub chrome_style: bool,
}

impl Manifest {
    /// Builds the manifest for a resolved title, optional suffix, and the
    /// original (unresolved) target URL.
    ///
    /// The raw URL is embedded verbatim in the description; the suffix
    /// only affects naming.
    #[must_use]
    pub fn build(display_title: &str, suffix: Option<&str>, raw_url: &str, sizes: &[u32]) -> Self {
        let name = match suffix {
            Some(suffix) if !suffix.is_empty() => {
                format!("QuickLaunch: {display_title} - {suffix}")
            }
            _ => format!("QuickLaunch: {display_title}"),
        };

        let icons: BTreeMap<u32, String> = sizes
            .iter()
            .map(|&size| (size, icon_filename(size)))
            .collect();

        Self {
            manifest_version: MANIFEST_VERSION,
            name: name.clone(),
            version: EXTENSION_VERSION.to_string(),
            description: format!("Quick launch shortcut for {raw_url}"),
            icons: icons.clone(),
            browser_action: BrowserAction {
                default_icon: icons,
                default_title: name,
            },
            background: Background {
                scripts: vec![CLICK_HANDLER_FILE.to_string()],
                persistent: false,
            },
            options_ui: OptionsUi {
                page: OPTIONS_PAGE_FILE.to_string(),
                chrome_style: true,
            },
            permissions: vec!["tabs".to_string(), "storage".to_string()],
        }
    }

    /// Serializes the manifest as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on failure.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }
}
