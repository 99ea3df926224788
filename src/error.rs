#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the badge generation pipeline and CLI.
///
/// Each variant captures the failing path or URL alongside the underlying
/// cause so diagnostics can name the exact resource involved. Instances are
/// typically constructed through the helper functions in this module. Every
/// failure is terminal for the run; no variant is retried.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors raised while opening the coverage report.
    #[error("failed to open coverage report {path:?}: {source}")]
    Open {
        /// Location of the coverage report.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps I/O errors raised while reading the coverage report contents.
    #[error("failed to read coverage report {path:?}: {source}")]
    Read {
        /// Location of the coverage report.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Returned when the coverage report contains no tokens to extract.
    #[error("coverage report {path:?} contains no coverage value")]
    EmptyReport {
        /// Location of the coverage report.
        path: PathBuf
    },
    /// Returned when the badge cannot be fetched from the rendering service.
    #[error("failed to fetch badge from {url}: {message}")]
    Network {
        /// URL of the badge request that failed.
        url:     String,
        /// Human readable message describing the transport failure.
        message: String
    },
    /// Wraps I/O errors raised while creating the badge target file.
    #[error("failed to create badge file {path:?}: {source}")]
    Create {
        /// Location of the badge file being produced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Wraps I/O errors raised while writing badge bytes to the target file.
    #[error("failed to write badge file {path:?}: {source}")]
    Write {
        /// Location of the badge file being produced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    }
}

impl Error {
    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

/// Creates an [`Error::Open`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the coverage report that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn open_error(path: &Path, source: std::io::Error) -> Error {
    Error::Open {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Read`] variant capturing the failing path and source.
pub fn read_error(path: &Path, source: std::io::Error) -> Error {
    Error::Read {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::EmptyReport`] variant naming the token-free report.
pub fn empty_report_error(path: &Path) -> Error {
    Error::EmptyReport {
        path: path.to_path_buf()
    }
}

/// Creates an [`Error::Network`] variant from the failing URL and cause.
///
/// # Parameters
///
/// * `url` - Badge request URL that could not be completed.
/// * `source` - Displayable transport or protocol failure.
pub fn network_error<S>(url: &str, source: S) -> Error
where
    S: std::fmt::Display
{
    Error::Network {
        url:     url.to_owned(),
        message: source.to_string()
    }
}

/// Creates an [`Error::Create`] variant capturing the failing path and source.
pub fn create_error(path: &Path, source: std::io::Error) -> Error {
    Error::Create {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Write`] variant capturing the failing path and source.
pub fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn to_display_string_matches_display() {
        let error = super::empty_report_error(std::path::Path::new("/tmp/output.out"));
        assert_eq!(error.to_string(), error.to_display_string());
    }

    #[test]
    fn open_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/output.out");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::open_error(path, io_error);

        match error {
            Error::Open {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected open error, got {other:?}")
        }
    }

    #[test]
    fn read_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/output.out");
        let io_error = std::io::Error::new(std::io::ErrorKind::InvalidData, "binary");
        let error = super::read_error(path, io_error);

        match error {
            Error::Read {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected read error, got {other:?}")
        }
    }

    #[test]
    fn empty_report_error_names_the_report() {
        let error = super::empty_report_error(std::path::Path::new("cov.out"));
        assert!(error.to_display_string().contains("cov.out"));
        assert!(error.to_display_string().contains("no coverage value"));
    }

    #[test]
    fn network_error_helper_records_url_and_message() {
        let error = super::network_error("https://img.shields.io/badge/a-b-c", "connection refused");

        match error {
            Error::Network {
                url,
                message
            } => {
                assert_eq!(url, "https://img.shields.io/badge/a-b-c");
                assert_eq!(message, "connection refused");
            }
            other => panic!("expected network error, got {other:?}")
        }
    }

    #[test]
    fn create_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/coverage.svg");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = super::create_error(path, io_error);

        match error {
            Error::Create {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected create error, got {other:?}")
        }
    }

    #[test]
    fn write_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/coverage.svg");
        let io_error = std::io::Error::new(std::io::ErrorKind::WriteZero, "short write");
        let error = super::write_error(path, io_error);

        match error {
            Error::Write {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::WriteZero);
            }
            other => panic!("expected write error, got {other:?}")
        }
    }
}
