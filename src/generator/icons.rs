//! Icon acquisition from the remote favicon service.
//!
//! Each configured size is fetched independently from the same endpoint,
//! parameterized by hostname and pixel size. Fetches run sequentially and
//! the aggregation policy is abort-on-first-failure: one non-success
//! status or transport error fails the whole run, with no partial icon
//! sets and no placeholder fallback. Payloads are written as-is; no image
//! format validation occurs.

use reqwest::Client;
use tracing::debug;

use super::error::GenerateError;

/// Which icon sizes a generated package carries.
///
/// The size table is fixed per variant; runtime data never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconVariant {
    /// A single 64px icon.
    #[default]
    Single64,
    /// The four standard extension sizes.
    FullSet,
}

impl IconVariant {
    /// Returns the configured pixel sizes, in written order.
    #[must_use]
    pub fn sizes(self) -> &'static [u32] {
        match self {
            Self::Single64 => &[64],
            Self::FullSet => &[16, 32, 48, 128],
        }
    }
}

/// Filename for the icon of a given pixel size.
///
/// Single source of truth: manifest icon paths and written files both go
/// through this function so they match byte-for-byte.
#[must_use]
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// One fetched icon payload.
#[derive(Debug, Clone)]
pub struct IconPayload {
    /// Pixel size requested from the favicon service.
    pub size: u32,
    /// Raw image bytes, written to disk unmodified.
    pub bytes: Vec<u8>,
}

/// Fetches every configured size, aborting on the first failure.
///
/// Fetches are independent in data but performed sequentially; a
/// concurrent implementation would have to keep the same abort-before-
/// success contract.
pub(crate) async fn fetch_all(
    client: &Client,
    endpoint: &str,
    hostname: &str,
    sizes: &[u32],
) -> Result<Vec<IconPayload>, GenerateError> {
    let mut payloads = Vec::with_capacity(sizes.len());
    for &size in sizes {
        payloads.push(fetch_one(client, endpoint, hostname, size).await?);
    }
    Ok(payloads)
}

async fn fetch_one(
    client: &Client,
    endpoint: &str,
    hostname: &str,
    size: u32,
) -> Result<IconPayload, GenerateError> {
    let sz = size.to_string();
    let request = client
        .get(endpoint)
        .query(&[("domain", hostname), ("sz", sz.as_str())]);

    let response = request
        .send()
        .await
        .map_err(|source| GenerateError::icon_network(endpoint, source))?;

    let request_url = response.url().to_string();
    let status = response.status();
    if !status.is_success() {
        return Err(GenerateError::icon_status(request_url, status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| GenerateError::icon_network(&request_url, source))?;

    debug!(hostname = %hostname, size, bytes = bytes.len(), "fetched icon");
    Ok(IconPayload {
        size,
        bytes: bytes.to_vec(),
    })
}
