//! CLI entry point for the quick-launch generator.

use std::io;

use anyhow::Result;
use clap::Parser;
use quicklaunch_core::{
    Generator, GeneratorConfig, IconVariant, RawRequest, Resolver, ResolverConfig,
};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs go to stderr; stdout carries only the success line.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    // Invalid URL is a usage error: fail before any network or disk work.
    let raw = RawRequest::new(args.url, args.suffix)?;

    let resolver = Resolver::new(ResolverConfig {
        max_redirects: usize::from(args.max_redirects),
        connect_timeout_secs: args.connect_timeout,
        read_timeout_secs: args.read_timeout,
        ..ResolverConfig::default()
    });
    let identity = resolver.resolve(&raw.url).await;
    info!(hostname = %identity.hostname, "resolved target");

    let variant = if args.full_icon_set {
        IconVariant::FullSet
    } else {
        IconVariant::Single64
    };
    let generator = Generator::new(GeneratorConfig {
        templates_root: args.templates,
        output_root: args.output_root,
        favicon_endpoint: args.favicon_endpoint,
        variant,
        connect_timeout_secs: args.connect_timeout,
        read_timeout_secs: args.read_timeout,
    });

    let path = generator.generate(&raw, &identity).await?;

    println!("Generated extension at {}", path.display());
    Ok(())
}
