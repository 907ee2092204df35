//! QuickLaunch Core Library
//!
//! This library turns a single target URL into a self-contained
//! browser-extension package: a manifest, a click handler, an options UI,
//! and icon images derived from the target site's favicon.
//!
//! # Architecture
//!
//! - [`resolver`] - Redirect-following URL resolution to a canonical identity
//! - [`sanitize`] - Path-segment sanitization for output directory naming
//! - [`generator`] - Artifact generation (manifest, scripts, icon fetches)
//!
//! The resolver runs first and never fails outward; the generator consumes
//! its output as plain data and performs the remaining network calls.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod generator;
mod http;
pub mod resolver;
pub mod sanitize;

// Re-export commonly used types
pub use generator::{
    DEFAULT_FAVICON_ENDPOINT, GenerateError, Generator, GeneratorConfig, IconVariant, RawRequest,
};
pub use resolver::{ResolvedIdentity, Resolver, ResolverConfig};
pub use sanitize::sanitize;
