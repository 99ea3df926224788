// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Extraction of the total coverage value from test output.
//!
//! The report format is deliberately loose: whatever tool produced the file,
//! only the last whitespace-delimited token is significant. Tooling such as
//! `go tool cover -func` and `cargo llvm-cov report` both end their summary
//! line with the total percentage, which is exactly the token picked up here.

use std::{fs::File, io::Read, path::Path};

use tracing::debug;

use crate::error::{self, Error};

/// Extracts the trailing coverage token from the report at `path`.
///
/// The file is read in full as text and split on whitespace; the last token
/// is returned verbatim, including any trailing `%`. No shape validation is
/// performed on the token itself.
///
/// # Errors
///
/// Returns [`Error::Open`] when the report cannot be opened, [`Error::Read`]
/// when its contents cannot be fully read as text, and
/// [`Error::EmptyReport`] when the file holds no tokens at all.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use covbadge::extract_total_coverage;
///
/// # fn main() -> Result<(), covbadge::Error> {
/// let total = extract_total_coverage(Path::new("output.out"))?;
/// println!("total coverage: {total}");
/// # Ok(())
/// # }
/// ```
pub fn extract_total_coverage(path: &Path) -> Result<String, Error> {
    let mut file = File::open(path).map_err(|source| error::open_error(path, source))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| error::read_error(path, source))?;

    let total = contents
        .split_whitespace()
        .next_back()
        .ok_or_else(|| error::empty_report_error(path))?;

    debug!("extracted coverage value {} from {}", total, path.display());
    Ok(total.to_owned())
}
