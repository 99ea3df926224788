// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Badge URL construction and retrieval from the shields.io endpoint.

use std::io::Read;

use tracing::debug;

use crate::{
    color::BadgeColor,
    error::{self, Error}
};

/// Base endpoint of the badge rendering service.
const BADGE_ENDPOINT: &str = "https://img.shields.io/badge";

/// Builds the badge request URL for the given label, value, and color.
///
/// Label and value are percent-encoded independently; the color token is
/// inserted verbatim. Override colors therefore reach the service exactly as
/// supplied, including characters that would otherwise require escaping.
///
/// # Examples
///
/// ```
/// use covbadge::{BadgeColor, badge_url};
///
/// let url = badge_url("Coverage", "85%", &BadgeColor::BrightGreen);
/// assert_eq!(url, "https://img.shields.io/badge/Coverage-85%25-brightgreen");
/// ```
pub fn badge_url(label: &str, value: &str, color: &BadgeColor) -> String {
    format!(
        "{BADGE_ENDPOINT}/{}-{}-{}",
        urlencoding::encode(label),
        urlencoding::encode(value),
        color.as_str()
    )
}

/// Performs a single blocking GET against `url` and returns the image bytes.
///
/// The response body is read to completion and the underlying stream is
/// released on every exit path. No retry is attempted; the transport's
/// default timeout behavior applies.
///
/// # Errors
///
/// Returns [`Error::Network`] when the request cannot be completed, the
/// service answers with a non-success status, or the body cannot be fully
/// read.
///
/// # Example
///
/// ```no_run
/// use covbadge::{BadgeColor, badge_url, fetch_badge};
///
/// # fn main() -> Result<(), covbadge::Error> {
/// let url = badge_url("Coverage", "85%", &BadgeColor::BrightGreen);
/// let bytes = fetch_badge(&url)?;
/// println!("fetched {} bytes", bytes.len());
/// # Ok(())
/// # }
/// ```
pub fn fetch_badge(url: &str) -> Result<Vec<u8>, Error> {
    debug!("fetching badge from {url}");
    let response = ureq::get(url)
        .call()
        .map_err(|source| error::network_error(url, source))?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|source| error::network_error(url, source))?;

    debug!("fetched badge image of {} bytes", bytes.len());
    Ok(bytes)
}
