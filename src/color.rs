// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Threshold-based classification of coverage values onto badge colors.

use std::fmt;

use crate::config::Threshold;

/// Color rendered on the right-hand side of the badge.
///
/// The three tier colors come from the fixed shields.io palette; overrides
/// are carried verbatim without validation against that palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    /// Coverage at or above the green threshold.
    BrightGreen,
    /// Coverage at or above the yellow threshold.
    Yellow,
    /// Coverage below both thresholds, or a value that failed to parse.
    Red,
    /// Caller-supplied override, used verbatim.
    Custom(String)
}

impl BadgeColor {
    /// Returns the color token inserted into the badge URL.
    pub fn as_str(&self) -> &str {
        match self {
            Self::BrightGreen => "brightgreen",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Custom(color) => color
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a coverage value onto a badge color.
///
/// A non-empty `override_color` always wins and is returned verbatim; no
/// numeric parsing happens on that path. Otherwise one trailing `%` is
/// stripped and the remainder is parsed as a float. A value that fails to
/// parse is treated as zero, so malformed input silently classifies into the
/// lowest tier instead of raising an error. The green boundary is evaluated
/// before the yellow one; both comparisons are inclusive.
///
/// # Examples
///
/// ```
/// use covbadge::{BadgeColor, Threshold, classify_coverage};
///
/// let threshold = Threshold::default();
/// assert_eq!(classify_coverage("85%", &threshold, None), BadgeColor::BrightGreen);
/// assert_eq!(classify_coverage("50%", &threshold, None), BadgeColor::Yellow);
/// assert_eq!(classify_coverage("10%", &threshold, None), BadgeColor::Red);
/// ```
pub fn classify_coverage(
    value: &str,
    threshold: &Threshold,
    override_color: Option<&str>
) -> BadgeColor {
    if let Some(color) = override_color.filter(|color| !color.is_empty()) {
        return BadgeColor::Custom(color.to_owned());
    }

    let numeric = value
        .strip_suffix('%')
        .unwrap_or(value)
        .parse::<f64>()
        .unwrap_or(0.0);

    if numeric >= threshold.green as f64 {
        BadgeColor::BrightGreen
    } else if numeric >= threshold.yellow as f64 {
        BadgeColor::Yellow
    } else {
        BadgeColor::Red
    }
}
