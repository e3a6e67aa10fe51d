//! Error types for puzzle setup, persistence and input parsing
//!
//! Failed placements during the search are not errors of this type: they are
//! ordinary branch outcomes reported by [`crate::spatial::board::PlacementError`].

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::board::PlacementError;
use crate::spatial::stones::StoneColor;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Static stone data is malformed
    ///
    /// Raised when a stone has no cells, repeats a cell, or a stone set
    /// declares the same color twice.
    InvalidStone {
        /// Name of the offending stone color
        color: String,
        /// Description of what is wrong with the stone
        reason: String,
    },

    /// Parameter or textual input validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Opening file contains a line that cannot be parsed
    InvalidOpening {
        /// 1-based line number in the opening file
        line: usize,
        /// Explanation of the parse failure
        reason: String,
    },

    /// Opening placement does not fit on the board
    Placement {
        /// Stone that could not be placed
        color: StoneColor,
        /// Why the placement was rejected
        source: PlacementError,
    },

    /// Persisted board text does not match the board shape
    InvalidSignature {
        /// 1-based line number inside the board record
        line: usize,
        /// Explanation of the mismatch
        reason: String,
    },

    /// Failed to save a rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStone { color, reason } => {
                write!(f, "Invalid stone '{color}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidOpening { line, reason } => {
                write!(f, "Invalid opening at line {line}: {reason}")
            }
            Self::Placement { color, source } => {
                write!(f, "Cannot place stone '{color}': {source}")
            }
            Self::InvalidSignature { line, reason } => {
                write!(f, "Invalid board record at line {line}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Placement { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a closure that wraps an I/O error with its path and operation
pub fn file_system(
    path: &Path,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> SolverError {
    let path = path.to_path_buf();
    move |source| SolverError::FileSystem {
        path,
        operation,
        source,
    }
}
