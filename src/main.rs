// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the covbadge binary.
//!
//! The CLI collects the badge options from flags, builds the immutable run
//! configuration, and hands it to the generation pipeline. All flags are
//! optional; the defaults cover the common "badge from `go test` output"
//! invocation with no arguments at all.

use std::{path::PathBuf, process};

use clap::Parser;
use colored::Colorize;
use covbadge::{BadgeConfig, Error, Threshold, generate_badge};

/// Command line interface for generating a coverage badge from test output.
#[derive(Debug, Parser)]
#[command(name = "covbadge", version, about = "Generate a coverage badge from test output")]
struct Cli {
    /// File containing the tests output.
    #[arg(long = "filename", value_name = "PATH", default_value = "output.out")]
    filename: PathBuf,

    /// Text on the left side of the badge.
    #[arg(long = "text", value_name = "LABEL", default_value = "Coverage")]
    text: String,

    /// At what percentage the badge becomes yellow instead of red.
    #[arg(long = "yellow", value_name = "PERCENT", default_value_t = 30)]
    yellow: i64,

    /// At what percentage the badge becomes green instead of yellow.
    #[arg(long = "green", value_name = "PERCENT", default_value_t = 70)]
    green: i64,

    /// Color of the badge, bypassing the threshold classification.
    #[arg(long = "color", value_name = "COLOR", default_value = "")]
    color: String,

    /// Target file receiving the badge image.
    #[arg(long = "target", value_name = "PATH", default_value = "coverage.svg")]
    target: PathBuf,

    /// Text on the right side of the badge, bypassing the coverage file.
    #[arg(long = "value", value_name = "VALUE", default_value = "")]
    value: String,

    /// Link the badge goes to.
    #[arg(long = "link", value_name = "URL", default_value = "")]
    link: String
}

impl Cli {
    /// Builds the run configuration, mapping empty flag values onto `None`.
    fn into_config(self) -> BadgeConfig {
        BadgeConfig {
            source:    self.filename,
            label:     self.text,
            threshold: Threshold {
                yellow: self.yellow,
                green:  self.green
            },
            color:     Some(self.color).filter(|color| !color.is_empty()),
            target:    self.target,
            value:     Some(self.value).filter(|value| !value.is_empty()),
            link:      Some(self.link).filter(|link| !link.is_empty())
        }
    }
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    init_tracing();

    if let Err(error) = run() {
        eprintln!("{}", error.to_display_string().red());
        process::exit(1);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from the badge generation pipeline.
fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    let config = cli.into_config();

    let summary = generate_badge(&config)?;
    println!(
        "{}",
        format!(
            "covbadge: coverage badge updated to {} in {}",
            summary.value,
            summary.target.display()
        )
        .cyan()
    );

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
}
