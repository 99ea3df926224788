// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration value types describing a single badge generation run.
//!
//! The configuration is constructed once by the CLI layer from parsed flags
//! and passed by parameter into the pipeline. Nothing in the crate reads
//! ambient process-wide state; a run owns its configuration for its whole
//! duration and never mutates it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Percentage boundaries separating the three badge color tiers.
///
/// The pair is intended to satisfy `yellow <= green`, but the invariant is
/// not enforced; the classifier simply evaluates the green boundary first.
///
/// # Examples
///
/// ```
/// use covbadge::Threshold;
///
/// let threshold = Threshold::default();
/// assert_eq!(threshold.yellow, 30);
/// assert_eq!(threshold.green, 70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    /// Percentage at which the badge turns yellow instead of red.
    pub yellow: i64,
    /// Percentage at which the badge turns green instead of yellow.
    pub green:  i64
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            yellow: 30,
            green:  70
        }
    }
}

/// Immutable description of one badge generation run.
///
/// Optional fields use `None` for "not supplied"; the CLI layer maps empty
/// flag values onto `None` before the configuration reaches the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeConfig {
    /// Test-output file the coverage value is extracted from.
    pub source:    PathBuf,
    /// Text on the left side of the badge.
    pub label:     String,
    /// Color tier boundaries applied during classification.
    pub threshold: Threshold,
    /// Optional color override that bypasses threshold classification.
    pub color:     Option<String>,
    /// File receiving the fetched badge image.
    pub target:    PathBuf,
    /// Optional coverage value override that bypasses extraction.
    pub value:     Option<String>,
    /// Link the badge points to. Accepted for compatibility; rendering does
    /// not consume it.
    pub link:      Option<String>
}
