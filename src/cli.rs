//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use quicklaunch_core::DEFAULT_FAVICON_ENDPOINT;

/// Generate a quick-launch browser extension for a target URL.
///
/// Resolves the URL through its redirects to name the package after the
/// site it ultimately represents, then writes a ready-to-load extension
/// directory with a manifest, click handler, options UI, and favicon-based
/// icons.
#[derive(Parser, Debug)]
#[command(name = "quick-launch")]
#[command(author, version, about)]
pub struct Args {
    /// Target URL the generated extension opens (must be absolute)
    pub url: String,

    /// Free-text suffix appended to the package name (naming only)
    pub suffix: Option<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate the full 16/32/48/128 icon set instead of a single 64px icon
    #[arg(long)]
    pub full_icon_set: bool,

    /// Maximum redirect hops before resolution falls back to the input URL (1-50)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=50))]
    pub max_redirects: u8,

    /// HTTP connect timeout in seconds (1-300)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=300))]
    pub connect_timeout: u64,

    /// HTTP read timeout in seconds (1-600)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub read_timeout: u64,

    /// Directory holding the static template files
    #[arg(long, default_value = "templates")]
    pub templates: PathBuf,

    /// Directory under which the output directory is created
    #[arg(long, default_value = ".")]
    pub output_root: PathBuf,

    /// Favicon service endpoint (templated with domain and size)
    #[arg(long, default_value = DEFAULT_FAVICON_ENDPOINT)]
    pub favicon_endpoint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_url() {
        let result = Args::try_parse_from(["quick-launch"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_url_only() {
        let args = Args::try_parse_from(["quick-launch", "https://example.com"]).unwrap();
        assert_eq!(args.url, "https://example.com");
        assert!(args.suffix.is_none());
        assert!(!args.full_icon_set);
        assert_eq!(args.max_redirects, 10);
    }

    #[test]
    fn test_cli_url_and_suffix() {
        let args = Args::try_parse_from(["quick-launch", "https://example.com", "beta"]).unwrap();
        assert_eq!(args.suffix.as_deref(), Some("beta"));
    }

    #[test]
    fn test_cli_full_icon_set_flag() {
        let args =
            Args::try_parse_from(["quick-launch", "https://example.com", "--full-icon-set"])
                .unwrap();
        assert!(args.full_icon_set);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["quick-launch", "https://example.com", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["quick-launch", "https://example.com", "-q"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_max_redirects_zero_rejected() {
        let result =
            Args::try_parse_from(["quick-launch", "https://example.com", "--max-redirects", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_paths_and_endpoint_overrides() {
        let args = Args::try_parse_from([
            "quick-launch",
            "https://example.com",
            "--templates",
            "/opt/tpl",
            "--output-root",
            "/tmp/out",
            "--favicon-endpoint",
            "http://127.0.0.1:9000/favicons",
        ])
        .unwrap();
        assert_eq!(args.templates, PathBuf::from("/opt/tpl"));
        assert_eq!(args.output_root, PathBuf::from("/tmp/out"));
        assert_eq!(args.favicon_endpoint, "http://127.0.0.1:9000/favicons");
    }

    #[test]
    fn test_cli_default_favicon_endpoint() {
        let args = Args::try_parse_from(["quick-launch", "https://example.com"]).unwrap();
        assert_eq!(args.favicon_endpoint, DEFAULT_FAVICON_ENDPOINT);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Args::try_parse_from(["quick-launch", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
