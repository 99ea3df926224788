// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for generating coverage badges from test output.
//!
//! The library exposes the building blocks behind the `covbadge` binary:
//! extracting the total coverage value from a test-output file, mapping the
//! value onto a badge color through configurable thresholds, constructing and
//! fetching the rendered badge from the shields.io endpoint, and persisting
//! the image bytes. All public APIs are documented with error semantics and
//! minimal examples to facilitate integration in automation tooling.

mod badge;
mod color;
mod config;
mod coverage;
mod error;
mod render;

pub use badge::{BadgeSummary, generate_badge, write_badge};
pub use color::{BadgeColor, classify_coverage};
pub use config::{BadgeConfig, Threshold};
pub use coverage::extract_total_coverage;
pub use error::Error;
pub use render::{badge_url, fetch_badge};
