// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Badge generation pipeline.
//!
//! The pipeline resolves the coverage value (literal override or report
//! extraction), classifies it onto a color, fetches the rendered badge, and
//! persists the image bytes. The first failing step surfaces its error; a
//! partially completed run leaves no cleanup behind.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf}
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    color::classify_coverage,
    config::BadgeConfig,
    coverage::extract_total_coverage,
    error::{self, Error},
    render::{badge_url, fetch_badge}
};

/// Result of a completed badge generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeSummary {
    /// Coverage value rendered on the badge.
    pub value:  String,
    /// Color token the value classified onto.
    pub color:  String,
    /// Path the badge image was written to.
    pub target: PathBuf
}

/// Generates the badge described by `config` and writes it to the target.
///
/// When a value override is supplied the report file is never touched;
/// otherwise the trailing token of the report becomes the badge value. The
/// one network call blocks until the transport resolves it.
///
/// # Errors
///
/// Propagates the first failure from extraction ([`Error::Open`],
/// [`Error::Read`], [`Error::EmptyReport`]), the fetch ([`Error::Network`]),
/// or persistence ([`Error::Create`], [`Error::Write`]).
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
///
/// use covbadge::{BadgeConfig, Threshold, generate_badge};
///
/// # fn main() -> Result<(), covbadge::Error> {
/// let config = BadgeConfig {
///     source:    PathBuf::from("output.out"),
///     label:     "Coverage".to_owned(),
///     threshold: Threshold::default(),
///     color:     None,
///     target:    PathBuf::from("coverage.svg"),
///     value:     None,
///     link:      None
/// };
/// let summary = generate_badge(&config)?;
/// println!("badge updated to {} in {}", summary.value, summary.target.display());
/// # Ok(())
/// # }
/// ```
pub fn generate_badge(config: &BadgeConfig) -> Result<BadgeSummary, Error> {
    generate_badge_with(config, fetch_badge)
}

fn generate_badge_with<F>(config: &BadgeConfig, fetch: F) -> Result<BadgeSummary, Error>
where
    F: FnOnce(&str) -> Result<Vec<u8>, Error>
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid template")
    );

    let value = match config.value.as_deref().filter(|value| !value.is_empty()) {
        Some(value) => value.to_owned(),
        None => {
            pb.set_message(format!("Reading coverage from {}...", config.source.display()));
            extract_total_coverage(&config.source)?
        }
    };
    debug!("resolved coverage value {value}");

    let color = classify_coverage(&value, &config.threshold, config.color.as_deref());
    debug!("classified coverage {value} as {color}");

    let url = badge_url(&config.label, &value, &color);
    pb.set_message("Fetching badge...");
    let bytes = fetch(&url)?;
    info!("fetched badge for {value} ({} bytes)", bytes.len());

    pb.set_message(format!("Writing badge to {}...", config.target.display()));
    write_badge(&config.target, &bytes)?;
    pb.finish_and_clear();
    info!("badge written to {}", config.target.display());

    Ok(BadgeSummary {
        value,
        color: color.as_str().to_owned(),
        target: config.target.clone()
    })
}

/// Writes the fetched badge bytes to `path`, creating or truncating it.
///
/// Parent directories are not created; an unreachable path surfaces as a
/// create error. The file handle is flushed and released on every exit path.
///
/// # Errors
///
/// Returns [`Error::Create`] when the target cannot be created and
/// [`Error::Write`] when the bytes cannot be fully written.
pub fn write_badge(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| error::create_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|source| error::write_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::write_error(path, source))
}
